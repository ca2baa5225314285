//! Final grades, one per student and subject.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct OwnTotalGrade {
    pub id: i32,
    pub subject_id: i32,
    pub subject_name: String,
    pub grade: String,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StudentTotalGrade {
    pub id: i32,
    pub student_id: i32,
    pub student_firstname: String,
    pub student_lastname: String,
    pub student_group_id: i32,
    pub student_group_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub grade: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTotalGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    #[validate(length(max = 50, message = "Grade length cannot be bigger than 50 characters"))]
    pub grade: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTotalGradeDto {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    #[validate(length(max = 50, message = "Grade length cannot be bigger than 50 characters"))]
    pub grade: String,
}
