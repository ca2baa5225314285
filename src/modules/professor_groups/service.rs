use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::professor_groups::model::{
    ProfessorGroupDto, ProfessorGroupRow, ProfessorWithGroups, UpdateProfessorGroupDto,
};

const DUPLICATE_RELATION: &str = "Professor Group relation already exists";
const RELATION_NOT_FOUND: &str = "Professor Group relation not found";

const SELECT_RELATIONS: &str = r#"
    SELECT pg.professor_id, p.firstname AS first_name, p.lastname AS last_name,
           p.email, p.phone_number, p.sex, p.birthdate,
           g.id, g.group_name
    FROM professor_group pg
    JOIN person p ON pg.professor_id = p.id
    JOIN group_uni g ON pg.group_id = g.id
"#;

pub struct ProfessorGroupService;

impl ProfessorGroupService {
    async fn fetch(
        db: &Database,
        filter: &str,
        id: Option<i32>,
    ) -> Result<Vec<ProfessorWithGroups>, AppError> {
        let sql = format!("{SELECT_RELATIONS} {filter} ORDER BY pg.professor_id, pg.group_id");
        let mut query = sqlx::query_as::<_, ProfessorGroupRow>(&sql);
        if let Some(id) = id {
            query = query.bind(id);
        }

        let rows = db.run(query.fetch_all(db.pool())).await?;
        Ok(ProfessorWithGroups::from_rows(rows))
    }

    #[instrument(skip(db))]
    pub async fn list_relations(db: &Database) -> Result<Vec<ProfessorWithGroups>, AppError> {
        Self::fetch(db, "", None).await
    }

    #[instrument(skip(db))]
    pub async fn list_by_professor(
        db: &Database,
        professor_id: i32,
    ) -> Result<Vec<ProfessorWithGroups>, AppError> {
        Self::fetch(db, "WHERE pg.professor_id = $1", Some(professor_id)).await
    }

    #[instrument(skip(db))]
    pub async fn list_by_group(
        db: &Database,
        group_id: i32,
    ) -> Result<Vec<ProfessorWithGroups>, AppError> {
        Self::fetch(db, "WHERE pg.group_id = $1", Some(group_id)).await
    }

    #[instrument(skip(db))]
    pub async fn create_relation(db: &Database, dto: ProfessorGroupDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO professor_group (professor_id, group_id) VALUES ($1, $2)")
                .bind(dto.professor_id)
                .bind(dto.group_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn update_relation(
        db: &Database,
        dto: UpdateProfessorGroupDto,
    ) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                r#"
                UPDATE professor_group SET professor_id = $1, group_id = $2
                WHERE professor_id = $3 AND group_id = $4
                "#,
            )
            .bind(dto.professor_id)
            .bind(dto.group_id)
            .bind(dto.old_professor_id)
            .bind(dto.old_group_id)
            .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_relation(db: &Database, dto: ProfessorGroupDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("DELETE FROM professor_group WHERE professor_id = $1 AND group_id = $2")
                .bind(dto.professor_id)
                .bind(dto.group_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
