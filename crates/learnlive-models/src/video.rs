use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTokenResponse {
    pub room: String,
    pub identity: String,
    pub token: String,
}
