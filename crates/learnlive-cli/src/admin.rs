//! Administrator bootstrap.
//!
//! The API only lets administrators create accounts, so the first one has
//! to come from here.

use chrono::NaiveDate;
use learnlive_core::hash_password;
use learnlive_core::validation::{is_valid_password, is_valid_username};
use learnlive_models::ADMINISTRATORS_GROUP_ID;
use sqlx::PgPool;

pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
}

/// Checks the same username and password rules the signup endpoint applies.
pub fn check_credentials(username: &str, password: &str) -> Result<(), String> {
    if !is_valid_username(username) {
        return Err("Username must be at least 3 English letters or digits".to_string());
    }
    if !is_valid_password(password) {
        return Err(
            "Password must be at least 8 characters with at least one English letter and one digit"
                .to_string(),
        );
    }
    Ok(())
}

/// Inserts an administrator into the administrators pseudo-group and
/// returns the new person id.
pub async fn create_admin(db: &PgPool, admin: &NewAdmin) -> Result<i32, Box<dyn std::error::Error>> {
    check_credentials(&admin.username, &admin.password)?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM person WHERE username = $1)")
            .bind(&admin.username)
            .fetch_one(db)
            .await?;
    if exists {
        return Err(format!("Username '{}' already exists", admin.username).into());
    }

    let password_hash = hash_password(&admin.password).map_err(|e| e.error.to_string())?;

    let id = sqlx::query_scalar(
        r#"
        INSERT INTO person (username, password, firstname, lastname, group_id,
                            is_professor, is_admin, birthdate)
        VALUES ($1, $2, $3, $4, $5, FALSE, TRUE, $6)
        RETURNING id
        "#,
    )
    .bind(&admin.username)
    .bind(&password_hash)
    .bind(&admin.first_name)
    .bind(&admin.last_name)
    .bind(ADMINISTRATORS_GROUP_ID)
    .bind(admin.birthdate)
    .fetch_one(db)
    .await?;

    Ok(id)
}
