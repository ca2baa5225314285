use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Subject {
    pub id: i32,
    pub subject_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Subject name must be between 1 and 255 characters"
    ))]
    pub subject_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubjectDto {
    pub id: i32,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Subject name must be between 1 and 255 characters"
    ))]
    pub subject_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubjectIdQuery {
    pub subject_id: i32,
}
