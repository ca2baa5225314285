//! Role lookups and guards.
//!
//! A person's role is stored as two flags on `person`: `is_admin` and
//! `is_professor`. A person with neither flag is a student. Guards return
//! 403 with the caller-supplied message so each endpoint can say exactly
//! what was refused.

use learnlive_core::AppError;
use learnlive_db::Database;
use learnlive_models::PersonRoles;
use tracing::instrument;

use crate::middleware::auth::AuthUser;

/// Loads the role flags of `person_id`, or `None` when no such person exists.
#[instrument(skip(db))]
pub async fn fetch_roles(db: &Database, person_id: i32) -> Result<Option<PersonRoles>, AppError> {
    db.run(
        sqlx::query_as::<_, PersonRoles>(
            "SELECT is_admin, is_professor FROM person WHERE id = $1",
        )
        .bind(person_id)
        .fetch_optional(db.pool()),
    )
    .await
}

impl AuthUser {
    pub fn require_admin(&self, message: &str) -> Result<(), AppError> {
        guard(self.is_admin(), message)
    }

    pub fn require_professor(&self, message: &str) -> Result<(), AppError> {
        guard(self.is_professor(), message)
    }

    pub fn require_student(&self, message: &str) -> Result<(), AppError> {
        guard(self.is_student(), message)
    }

    /// Admins and professors.
    pub fn require_staff(&self, message: &str) -> Result<(), AppError> {
        guard(self.is_admin() || self.is_professor(), message)
    }
}

fn guard(allowed: bool, message: &str) -> Result<(), AppError> {
    crate::metrics::track_authorization_check(allowed);
    if allowed {
        Ok(())
    } else {
        Err(AppError::forbidden(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnlive_auth::Claims;

    fn user(is_admin: bool, is_professor: bool) -> AuthUser {
        AuthUser {
            claims: Claims {
                iss: "1".to_string(),
                sub: "x".to_string(),
                exp: 9999999999,
                iat: 1234567890,
            },
            person_id: 1,
            roles: PersonRoles {
                is_admin,
                is_professor,
            },
        }
    }

    #[test]
    fn test_admin_guard() {
        assert!(user(true, false).require_admin("no").is_ok());
        let err = user(false, true).require_admin("Only admins").unwrap_err();
        assert_eq!(err.status.as_u16(), 403);
        assert_eq!(err.error.to_string(), "Only admins");
    }

    #[test]
    fn test_staff_guard_admits_admins_and_professors() {
        assert!(user(true, false).require_staff("no").is_ok());
        assert!(user(false, true).require_staff("no").is_ok());
        assert!(user(false, false).require_staff("no").is_err());
    }

    #[test]
    fn test_student_guard() {
        assert!(user(false, false).require_student("no").is_ok());
        assert!(user(false, true).require_student("no").is_err());
        assert!(user(true, false).require_student("no").is_err());
    }

    #[test]
    fn test_professor_guard() {
        assert!(user(false, true).require_professor("no").is_ok());
        assert!(user(true, false).require_professor("no").is_err());
    }
}
