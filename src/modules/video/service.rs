use learnlive_auth::generate_room_token;
use learnlive_config::VideoConfig;
use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::rooms::service::RoomService;
use crate::modules::video::model::RoomTokenResponse;

pub struct VideoService;

impl VideoService {
    /// Issues a media-server token for an existing room. The room name sent
    /// to the media server is the room id.
    #[instrument(skip(db, config))]
    pub async fn issue_room_token(
        db: &Database,
        config: &VideoConfig,
        room_id: i32,
        identity: &str,
    ) -> Result<RoomTokenResponse, AppError> {
        let room = RoomService::find_room(db, room_id).await?;
        let room = room.id.to_string();

        let token = generate_room_token(config, identity, &room)?;
        crate::metrics::track_room_token_issued();

        Ok(RoomTokenResponse {
            room,
            identity: identity.to_string(),
            token,
        })
    }
}
