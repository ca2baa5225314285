use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};

const DUPLICATE_SUBJECT: &str = "Subject already exists";
const SUBJECT_NOT_FOUND: &str = "Subject not found";

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db))]
    pub async fn list_subjects(db: &Database) -> Result<Vec<Subject>, AppError> {
        db.run(
            sqlx::query_as::<_, Subject>("SELECT id, subject_name FROM subject ORDER BY id")
                .fetch_all(db.pool()),
        )
        .await
    }

    /// Subjects a professor teaches.
    #[instrument(skip(db))]
    pub async fn list_professor_subjects(
        db: &Database,
        professor_id: i32,
    ) -> Result<Vec<Subject>, AppError> {
        db.run(
            sqlx::query_as::<_, Subject>(
                r#"
                SELECT s.id, s.subject_name
                FROM professor_subject ps
                JOIN subject s ON ps.subject_id = s.id
                WHERE ps.professor_id = $1
                ORDER BY ps.subject_id
                "#,
            )
            .bind(professor_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    /// Subjects in the program of the student's group.
    #[instrument(skip(db))]
    pub async fn list_student_subjects(
        db: &Database,
        student_id: i32,
    ) -> Result<Vec<Subject>, AppError> {
        db.run(
            sqlx::query_as::<_, Subject>(
                r#"
                SELECT s.id, s.subject_name
                FROM group_subject gs
                JOIN person p ON gs.group_id = p.group_id
                JOIN subject s ON gs.subject_id = s.id
                WHERE p.id = $1
                ORDER BY gs.subject_id
                "#,
            )
            .bind(student_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db, dto))]
    pub async fn create_subject(db: &Database, dto: CreateSubjectDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO subject (subject_name) VALUES ($1)")
                .bind(&dto.subject_name)
                .execute(db.pool()),
            DUPLICATE_SUBJECT,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db, dto), fields(id = dto.id))]
    pub async fn update_subject(db: &Database, dto: UpdateSubjectDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("UPDATE subject SET subject_name = $1 WHERE id = $2")
                .bind(&dto.subject_name)
                .bind(dto.id)
                .execute(db.pool()),
            DUPLICATE_SUBJECT,
            SUBJECT_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_subject(db: &Database, id: i32) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("DELETE FROM subject WHERE id = $1")
                .bind(id)
                .execute(db.pool()),
            DUPLICATE_SUBJECT,
            SUBJECT_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
