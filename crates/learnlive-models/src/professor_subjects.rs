use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::professors::{Professor, group_by_professor};
use crate::subjects::Subject;

/// One professor/subject pair as returned by the join.
#[derive(Debug, FromRow)]
pub struct ProfessorSubjectRow {
    #[sqlx(flatten)]
    pub professor: Professor,
    #[sqlx(flatten)]
    pub subject: Subject,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorWithSubjects {
    #[serde(flatten)]
    pub professor: Professor,
    pub subjects: Vec<Subject>,
}

impl ProfessorWithSubjects {
    pub fn from_rows(rows: Vec<ProfessorSubjectRow>) -> Vec<Self> {
        group_by_professor(rows.into_iter().map(|row| (row.professor, row.subject)))
            .into_iter()
            .map(|(professor, subjects)| Self {
                professor,
                subjects,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessorSubjectDto {
    pub professor_id: i32,
    pub subject_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessorSubjectDto {
    pub professor_id: i32,
    pub subject_id: i32,
    pub old_professor_id: i32,
    pub old_subject_id: i32,
}
