use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::grades::model::{
    CreateGradeDto, GradeRowQuery, OwnGrade, StudentGrade, UpdateGradeDto, effective_attendance,
};

const GRADE_NOT_FOUND: &str = "Grade not found";
const DUPLICATE_GRADE: &str = "Grade already exists";

const SELECT_STUDENT_GRADES: &str = r#"
    SELECT sg.id, sg.student_id,
           p.firstname AS student_firstname, p.lastname AS student_lastname,
           p.group_id AS student_group_id, g.group_name AS student_group_name,
           sg.subject_id, s.subject_name, sg.grade, sg.has_attended
    FROM student_grades sg
    JOIN subject s ON sg.subject_id = s.id
    JOIN person p ON sg.student_id = p.id
    JOIN group_uni g ON p.group_id = g.id
"#;

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db))]
    pub async fn list_own_grades(
        db: &Database,
        student_id: i32,
        subject_id: i32,
    ) -> Result<Vec<OwnGrade>, AppError> {
        db.run(
            sqlx::query_as::<_, OwnGrade>(
                r#"
                SELECT sg.id, sg.subject_id, s.subject_name, sg.grade, sg.has_attended
                FROM student_grades sg
                JOIN subject s ON sg.subject_id = s.id
                WHERE sg.student_id = $1 AND sg.subject_id = $2
                ORDER BY sg.id
                "#,
            )
            .bind(student_id)
            .bind(subject_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_student_grades(
        db: &Database,
        student_id: i32,
        subject_id: i32,
    ) -> Result<Vec<StudentGrade>, AppError> {
        let sql = format!(
            "{SELECT_STUDENT_GRADES} WHERE sg.student_id = $1 AND sg.subject_id = $2 ORDER BY sg.id"
        );
        db.run(
            sqlx::query_as::<_, StudentGrade>(&sql)
                .bind(student_id)
                .bind(subject_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_group_grades(
        db: &Database,
        group_id: i32,
    ) -> Result<Vec<StudentGrade>, AppError> {
        let sql = format!(
            "{SELECT_STUDENT_GRADES} WHERE p.group_id = $1 ORDER BY p.lastname, p.firstname, sg.subject_id, sg.id"
        );
        db.run(
            sqlx::query_as::<_, StudentGrade>(&sql)
                .bind(group_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn insert_grade(db: &Database, dto: CreateGradeDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query(
                r#"
                INSERT INTO student_grades (student_id, subject_id, grade, has_attended)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(dto.student_id)
            .bind(dto.subject_id)
            .bind(dto.grade)
            .bind(effective_attendance(dto.grade, dto.has_attended))
            .execute(db.pool()),
            DUPLICATE_GRADE,
        )
        .await?;

        crate::metrics::track_grade_recorded("lesson", "insert");
        Ok(())
    }

    /// Only touches the row when it still belongs to the student and subject
    /// that were authorized; anything else is reported as not found.
    #[instrument(skip(db))]
    pub async fn update_grade(db: &Database, dto: UpdateGradeDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                r#"
                UPDATE student_grades
                SET grade = $3, has_attended = $4
                WHERE id = $5 AND student_id = $1 AND subject_id = $2
                "#,
            )
            .bind(dto.student_id)
            .bind(dto.subject_id)
            .bind(dto.grade)
            .bind(effective_attendance(dto.grade, dto.has_attended))
            .bind(dto.id)
            .execute(db.pool()),
            DUPLICATE_GRADE,
            GRADE_NOT_FOUND,
        )
        .await?;

        crate::metrics::track_grade_recorded("lesson", "update");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_grade(db: &Database, row: GradeRowQuery) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                "DELETE FROM student_grades WHERE id = $1 AND student_id = $2 AND subject_id = $3",
            )
            .bind(row.id)
            .bind(row.student_id)
            .bind(row.subject_id)
            .execute(db.pool()),
            DUPLICATE_GRADE,
            GRADE_NOT_FOUND,
        )
        .await?;

        crate::metrics::track_grade_recorded("lesson", "delete");
        Ok(())
    }
}
