use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::professor_subjects::model::{
    ProfessorSubjectDto, ProfessorSubjectRow, ProfessorWithSubjects, UpdateProfessorSubjectDto,
};

const DUPLICATE_RELATION: &str = "Professor Subject relation already exists";
const RELATION_NOT_FOUND: &str = "Professor Subject relation not found";

const SELECT_RELATIONS: &str = r#"
    SELECT ps.professor_id, p.firstname AS first_name, p.lastname AS last_name,
           p.email, p.phone_number, p.sex, p.birthdate,
           s.id, s.subject_name
    FROM professor_subject ps
    JOIN person p ON ps.professor_id = p.id
    JOIN subject s ON ps.subject_id = s.id
"#;

pub struct ProfessorSubjectService;

impl ProfessorSubjectService {
    async fn fetch(
        db: &Database,
        filter: &str,
        id: Option<i32>,
    ) -> Result<Vec<ProfessorWithSubjects>, AppError> {
        let sql = format!("{SELECT_RELATIONS} {filter} ORDER BY ps.professor_id, ps.subject_id");
        let mut query = sqlx::query_as::<_, ProfessorSubjectRow>(&sql);
        if let Some(id) = id {
            query = query.bind(id);
        }

        let rows = db.run(query.fetch_all(db.pool())).await?;
        Ok(ProfessorWithSubjects::from_rows(rows))
    }

    #[instrument(skip(db))]
    pub async fn list_relations(db: &Database) -> Result<Vec<ProfessorWithSubjects>, AppError> {
        Self::fetch(db, "", None).await
    }

    #[instrument(skip(db))]
    pub async fn list_by_professor(
        db: &Database,
        professor_id: i32,
    ) -> Result<Vec<ProfessorWithSubjects>, AppError> {
        Self::fetch(db, "WHERE ps.professor_id = $1", Some(professor_id)).await
    }

    #[instrument(skip(db))]
    pub async fn list_by_subject(
        db: &Database,
        subject_id: i32,
    ) -> Result<Vec<ProfessorWithSubjects>, AppError> {
        Self::fetch(db, "WHERE ps.subject_id = $1", Some(subject_id)).await
    }

    #[instrument(skip(db))]
    pub async fn create_relation(db: &Database, dto: ProfessorSubjectDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO professor_subject (professor_id, subject_id) VALUES ($1, $2)")
                .bind(dto.professor_id)
                .bind(dto.subject_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn update_relation(
        db: &Database,
        dto: UpdateProfessorSubjectDto,
    ) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                r#"
                UPDATE professor_subject SET professor_id = $1, subject_id = $2
                WHERE professor_id = $3 AND subject_id = $4
                "#,
            )
            .bind(dto.professor_id)
            .bind(dto.subject_id)
            .bind(dto.old_professor_id)
            .bind(dto.old_subject_id)
            .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_relation(db: &Database, dto: ProfessorSubjectDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("DELETE FROM professor_subject WHERE professor_id = $1 AND subject_id = $2")
                .bind(dto.professor_id)
                .bind(dto.subject_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
