//! Per-lesson grades and attendance.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A grade as seen by the student who received it.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct OwnGrade {
    pub id: i32,
    pub subject_id: i32,
    pub subject_name: String,
    pub grade: i32,
    pub has_attended: bool,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StudentGrade {
    pub id: i32,
    pub student_id: i32,
    pub student_firstname: String,
    pub student_lastname: String,
    pub student_group_id: i32,
    pub student_group_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub grade: i32,
    pub has_attended: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    #[serde(default)]
    pub grade: i32,
    #[serde(default)]
    pub has_attended: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGradeDto {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    #[serde(default)]
    pub grade: i32,
    #[serde(default)]
    pub has_attended: bool,
}

/// A student who received a non-zero grade was present.
pub fn effective_attendance(grade: i32, has_attended: bool) -> bool {
    grade != 0 || has_attended
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnGradesQuery {
    pub subject_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentGradesQuery {
    pub student_id: i32,
    pub subject_id: i32,
}

/// Identifies a single grade row for deletion. Both owner columns must
/// match, so the authorization check and the delete see the same row.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradeRowQuery {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_grade_forces_attendance() {
        assert!(effective_attendance(5, false));
        assert!(effective_attendance(-1, false));
        assert!(effective_attendance(0, true));
        assert!(!effective_attendance(0, false));
    }

    #[test]
    fn test_grade_and_attendance_default_when_omitted() {
        let dto: CreateGradeDto =
            serde_json::from_str(r#"{"student_id": 3, "subject_id": 8}"#).unwrap();
        assert_eq!(dto.grade, 0);
        assert!(!dto.has_attended);
    }
}
