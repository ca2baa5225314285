use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::groups::Group;
use crate::professors::{Professor, group_by_professor};

#[derive(Debug, FromRow)]
pub struct ProfessorGroupRow {
    #[sqlx(flatten)]
    pub professor: Professor,
    #[sqlx(flatten)]
    pub group: Group,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorWithGroups {
    #[serde(flatten)]
    pub professor: Professor,
    pub groups: Vec<Group>,
}

impl ProfessorWithGroups {
    pub fn from_rows(rows: Vec<ProfessorGroupRow>) -> Vec<Self> {
        group_by_professor(rows.into_iter().map(|row| (row.professor, row.group)))
            .into_iter()
            .map(|(professor, groups)| Self { professor, groups })
            .collect()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessorGroupDto {
    pub professor_id: i32,
    pub group_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessorGroupDto {
    pub professor_id: i32,
    pub group_id: i32,
    pub old_professor_id: i32,
    pub old_group_id: i32,
}
