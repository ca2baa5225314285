//! Professor details shared by the professor-subject and professor-group
//! relation listings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Professor {
    pub professor_id: i32,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub sex: Option<String>,
    pub birthdate: NaiveDate,
}

/// Collapses `(professor, item)` rows into one entry per professor,
/// keeping the first-seen order of both professors and items.
///
/// Rows of the same professor are expected to be adjacent, which the
/// listing queries guarantee with `ORDER BY professor_id`.
pub fn group_by_professor<T>(
    rows: impl IntoIterator<Item = (Professor, T)>,
) -> Vec<(Professor, Vec<T>)> {
    let mut grouped: Vec<(Professor, Vec<T>)> = Vec::new();

    for (professor, item) in rows {
        match grouped.last_mut() {
            Some((current, items)) if current.professor_id == professor.professor_id => {
                items.push(item)
            }
            _ => grouped.push((professor, vec![item])),
        }
    }

    grouped
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessorIdQuery {
    pub professor_id: i32,
}
