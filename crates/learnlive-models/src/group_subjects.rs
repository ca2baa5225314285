use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct GroupSubject {
    pub group_id: i32,
    pub group_name: String,
    pub subject_id: i32,
    pub subject_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupSubjectDto {
    pub group_id: i32,
    pub subject_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGroupSubjectDto {
    pub old_group_id: i32,
    pub old_subject_id: i32,
    pub new_group_id: i32,
    pub new_subject_id: i32,
}
