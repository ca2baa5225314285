use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use learnlive_auth::{Claims, verify_session_token};
use learnlive_core::AppError;
use learnlive_models::PersonRoles;

use crate::middleware::role::fetch_roles;
use crate::state::AppState;

/// The authenticated caller.
///
/// Extraction fails with 401 when the session cookie is missing, the token
/// does not verify, or the person it names no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub person_id: i32,
    pub roles: PersonRoles,
}

impl AuthUser {
    /// Display identity carried in the token subject.
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }

    pub fn is_admin(&self) -> bool {
        self.roles.is_admin
    }

    pub fn is_professor(&self) -> bool {
        self.roles.is_professor
    }

    pub fn is_student(&self) -> bool {
        self.roles.is_student()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(&state.jwt_config.cookie_name)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::unauthorized("Unauthenticated"))?;

        let claims = verify_session_token(&token, &state.jwt_config)?;
        let person_id = claims.person_id()?;

        let roles = fetch_roles(&state.db, person_id).await?.ok_or_else(|| {
            tracing::warn!(person_id, "token names a person that does not exist");
            AppError::unauthorized("You are not logged in")
        })?;

        Ok(AuthUser {
            claims,
            person_id,
            roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(is_admin: bool, is_professor: bool) -> AuthUser {
        AuthUser {
            claims: Claims {
                iss: "12".to_string(),
                sub: "Doe Jane (jdoe ID: 12)".to_string(),
                exp: 9999999999,
                iat: 1234567890,
            },
            person_id: 12,
            roles: PersonRoles {
                is_admin,
                is_professor,
            },
        }
    }

    #[test]
    fn test_role_flags() {
        let admin = auth_user(true, false);
        assert!(admin.is_admin());
        assert!(!admin.is_student());

        let student = auth_user(false, false);
        assert!(student.is_student());
        assert!(!student.is_professor());
        assert_eq!(student.subject(), "Doe Jane (jdoe ID: 12)");
    }
}
