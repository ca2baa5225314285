use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const PROFESSORS_GROUP_ID: i32 = 1;
pub const ADMINISTRATORS_GROUP_ID: i32 = 2;

/// Pseudo-groups holding professors and administrators. They are never
/// listed as study groups.
pub const RESERVED_GROUP_IDS: [i32; 2] = [PROFESSORS_GROUP_ID, ADMINISTRATORS_GROUP_ID];

pub fn is_reserved_group(id: i32) -> bool {
    RESERVED_GROUP_IDS.contains(&id)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Group {
    pub id: i32,
    pub group_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGroupDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Group name must be between 1 and 255 characters"
    ))]
    pub group_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGroupDto {
    pub id: i32,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Group name must be between 1 and 255 characters"
    ))]
    pub group_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupIdQuery {
    pub group_id: i32,
}
