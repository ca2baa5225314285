use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub subject_id: i32,
    pub room_name: String,
}

/// A room together with the name of the subject it belongs to.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SubjectRoom {
    pub id: i32,
    pub subject_id: i32,
    pub subject_name: Option<String>,
    pub room_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomDto {
    pub subject_id: i32,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Room name must be between 1 and 255 characters"
    ))]
    pub room_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomDto {
    pub id: i32,
    pub subject_id: i32,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Room name must be between 1 and 255 characters"
    ))]
    pub room_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomIdQuery {
    pub room_id: i32,
}
