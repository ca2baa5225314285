use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::total_grades::model::{
    CreateTotalGradeDto, GradeRowQuery, OwnTotalGrade, StudentTotalGrade, UpdateTotalGradeDto,
};

const DUPLICATE_TOTAL_GRADE: &str = "Student already has a grade for this subject";
const TOTAL_GRADE_NOT_FOUND: &str = "Total grade not found";

const SELECT_STUDENT_TOTAL_GRADES: &str = r#"
    SELECT stg.id, stg.student_id,
           p.firstname AS student_firstname, p.lastname AS student_lastname,
           p.group_id AS student_group_id, g.group_name AS student_group_name,
           stg.subject_id, s.subject_name, stg.grade
    FROM student_total_grades stg
    JOIN subject s ON stg.subject_id = s.id
    JOIN person p ON stg.student_id = p.id
    JOIN group_uni g ON p.group_id = g.id
"#;

pub struct TotalGradeService;

impl TotalGradeService {
    #[instrument(skip(db))]
    pub async fn list_own_total_grades(
        db: &Database,
        student_id: i32,
    ) -> Result<Vec<OwnTotalGrade>, AppError> {
        db.run(
            sqlx::query_as::<_, OwnTotalGrade>(
                r#"
                SELECT stg.id, stg.subject_id, s.subject_name, stg.grade
                FROM student_total_grades stg
                JOIN subject s ON stg.subject_id = s.id
                WHERE stg.student_id = $1
                ORDER BY stg.subject_id
                "#,
            )
            .bind(student_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_student_total_grades(
        db: &Database,
        student_id: i32,
    ) -> Result<Vec<StudentTotalGrade>, AppError> {
        let sql =
            format!("{SELECT_STUDENT_TOTAL_GRADES} WHERE stg.student_id = $1 ORDER BY stg.subject_id");
        db.run(
            sqlx::query_as::<_, StudentTotalGrade>(&sql)
                .bind(student_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_group_total_grades(
        db: &Database,
        group_id: i32,
    ) -> Result<Vec<StudentTotalGrade>, AppError> {
        let sql = format!(
            "{SELECT_STUDENT_TOTAL_GRADES} WHERE p.group_id = $1 ORDER BY p.lastname, p.firstname, stg.subject_id"
        );
        db.run(
            sqlx::query_as::<_, StudentTotalGrade>(&sql)
                .bind(group_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn insert_total_grade(
        db: &Database,
        dto: CreateTotalGradeDto,
    ) -> Result<(), AppError> {
        db.run_write(
            sqlx::query(
                "INSERT INTO student_total_grades (student_id, subject_id, grade) VALUES ($1, $2, $3)",
            )
            .bind(dto.student_id)
            .bind(dto.subject_id)
            .bind(&dto.grade)
            .execute(db.pool()),
            DUPLICATE_TOTAL_GRADE,
        )
        .await?;

        crate::metrics::track_grade_recorded("total", "insert");
        Ok(())
    }

    /// Only touches the row when it still belongs to the student and subject
    /// that were authorized; anything else is reported as not found.
    #[instrument(skip(db))]
    pub async fn update_total_grade(
        db: &Database,
        dto: UpdateTotalGradeDto,
    ) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                r#"
                UPDATE student_total_grades
                SET grade = $3
                WHERE id = $4 AND student_id = $1 AND subject_id = $2
                "#,
            )
            .bind(dto.student_id)
            .bind(dto.subject_id)
            .bind(&dto.grade)
            .bind(dto.id)
            .execute(db.pool()),
            DUPLICATE_TOTAL_GRADE,
            TOTAL_GRADE_NOT_FOUND,
        )
        .await?;

        crate::metrics::track_grade_recorded("total", "update");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_total_grade(db: &Database, row: GradeRowQuery) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                "DELETE FROM student_total_grades WHERE id = $1 AND student_id = $2 AND subject_id = $3",
            )
            .bind(row.id)
            .bind(row.student_id)
            .bind(row.subject_id)
            .execute(db.pool()),
            DUPLICATE_TOTAL_GRADE,
            TOTAL_GRADE_NOT_FOUND,
        )
        .await?;

        crate::metrics::track_grade_recorded("total", "delete");
        Ok(())
    }
}
