//! Ownership predicates.
//!
//! Each predicate is a single point query. A missing row means `false`;
//! only driver failures and timeouts are errors.

use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::middleware::auth::AuthUser;

/// Whether `professor_id` teaches `subject_id`.
#[instrument(skip(db))]
pub async fn professor_has_subject(
    db: &Database,
    professor_id: i32,
    subject_id: i32,
) -> Result<bool, AppError> {
    db.run(
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM professor_subject WHERE professor_id = $1 AND subject_id = $2)",
        )
        .bind(professor_id)
        .bind(subject_id)
        .fetch_one(db.pool()),
    )
    .await
}

/// Whether `professor_id` teaches the group `student_id` belongs to.
#[instrument(skip(db))]
pub async fn professor_has_group(
    db: &Database,
    professor_id: i32,
    student_id: i32,
) -> Result<bool, AppError> {
    db.run(
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM professor_group pg
                JOIN person p ON pg.group_id = p.group_id
                WHERE pg.professor_id = $1 AND p.id = $2
            )
            "#,
        )
        .bind(professor_id)
        .bind(student_id)
        .fetch_one(db.pool()),
    )
    .await
}

/// Whether `subject_id` is in the program of the group `student_id` belongs to.
#[instrument(skip(db))]
pub async fn student_has_subject(
    db: &Database,
    student_id: i32,
    subject_id: i32,
) -> Result<bool, AppError> {
    db.run(
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM person p
                JOIN group_subject gs ON p.group_id = gs.group_id
                WHERE p.id = $1 AND gs.subject_id = $2
            )
            "#,
        )
        .bind(student_id)
        .bind(subject_id)
        .fetch_one(db.pool()),
    )
    .await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeAction {
    Set,
    Update,
    Delete,
}

impl GradeAction {
    fn verb(self) -> &'static str {
        match self {
            GradeAction::Set => "set",
            GradeAction::Update => "update",
            GradeAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeKind {
    Lesson,
    Total,
}

impl GradeKind {
    fn noun(self) -> &'static str {
        match self {
            GradeKind::Lesson => "grades",
            GradeKind::Total => "total grades",
        }
    }
}

/// Which step of the grading gate refused the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeDenial {
    NotProfessor,
    SubjectNotTaught,
    GroupNotTaught,
    SubjectNotInProgram,
}

impl GradeDenial {
    pub fn message(self, action: GradeAction, kind: GradeKind) -> String {
        match self {
            GradeDenial::NotProfessor => "You do not have professor privileges".to_string(),
            GradeDenial::SubjectNotTaught => format!(
                "You can only {} {} for subjects that you teach",
                action.verb(),
                kind.noun()
            ),
            GradeDenial::GroupNotTaught => format!(
                "You can only {} {} for students from groups that you teach",
                action.verb(),
                kind.noun()
            ),
            GradeDenial::SubjectNotInProgram => {
                "Student doesn't have this subject in their program".to_string()
            }
        }
    }
}

/// The grading gate: the caller must be a professor who teaches the subject
/// and the student's group, and the subject must be in the student's program.
/// Checks run in that order and stop at the first refusal.
#[instrument(skip(db, auth_user), fields(professor_id = auth_user.person_id))]
pub async fn ensure_can_grade(
    db: &Database,
    auth_user: &AuthUser,
    student_id: i32,
    subject_id: i32,
    action: GradeAction,
    kind: GradeKind,
) -> Result<(), AppError> {
    let denial = if !auth_user.is_professor() {
        Some(GradeDenial::NotProfessor)
    } else if !professor_has_subject(db, auth_user.person_id, subject_id).await? {
        Some(GradeDenial::SubjectNotTaught)
    } else if !professor_has_group(db, auth_user.person_id, student_id).await? {
        Some(GradeDenial::GroupNotTaught)
    } else if !student_has_subject(db, student_id, subject_id).await? {
        Some(GradeDenial::SubjectNotInProgram)
    } else {
        None
    };

    match denial {
        Some(denial) => {
            crate::metrics::track_authorization_check(false);
            Err(AppError::forbidden(denial.message(action, kind)))
        }
        None => {
            crate::metrics::track_authorization_check(true);
            Ok(())
        }
    }
}
