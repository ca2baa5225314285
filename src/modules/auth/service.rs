use learnlive_auth::{create_session_token, session_subject};
use learnlive_config::JwtConfig;
use learnlive_core::{AppError, hash_password, verify_password};
use learnlive_db::Database;
use tracing::instrument;

use crate::metrics::{track_login_failure, track_login_success, track_signup};
use crate::modules::auth::model::{LoginRequest, PersonCredentials, SignupRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn signup(db: &Database, dto: SignupRequest) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.password)?;

        db.run_write(
            sqlx::query(
                r#"
                INSERT INTO person
                    (username, password, firstname, lastname, email, phone_number,
                     group_id, is_professor, is_admin, sex, birthdate)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(&dto.username)
            .bind(&hashed_password)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(&dto.phone_number)
            .bind(dto.group_id)
            .bind(dto.is_professor)
            .bind(dto.is_admin)
            .bind(&dto.sex)
            .bind(dto.birthdate)
            .execute(db.pool()),
            "Username already exists",
        )
        .await?;

        let role = match (dto.is_admin, dto.is_professor) {
            (true, _) => "admin",
            (false, true) => "professor",
            (false, false) => "student",
        };
        track_signup(role);

        Ok(())
    }

    /// Checks the credentials and returns a signed session token.
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        db: &Database,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let person = db
            .run(
                sqlx::query_as::<_, PersonCredentials>(
                    "SELECT id, username, firstname, lastname, password FROM person WHERE username = $1",
                )
                .bind(&dto.username)
                .fetch_optional(db.pool()),
            )
            .await?;

        let Some(person) = person else {
            track_login_failure("unknown_username");
            return Err(AppError::unauthorized("Invalid username or password"));
        };

        if !verify_password(&dto.password, &person.password)? {
            track_login_failure("wrong_password");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let subject = session_subject(
            &person.lastname,
            &person.firstname,
            &person.username,
            person.id,
        );
        let token = create_session_token(person.id, &subject, jwt_config)?;

        track_login_success();
        Ok(token)
    }
}
