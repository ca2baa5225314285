//! Person accounts: sign-up, login and the role flags behind every
//! authorization decision.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use learnlive_core::validation::{validate_password, validate_username};
use serde::{Deserialize, Deserializer, Serialize, de};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Body of `POST /api/signup`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    #[serde(rename = "firstName")]
    #[validate(length(min = 1, max = 255, message = "First name must be 1-255 characters"))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1, max = 255, message = "Last name must be 1-255 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 32, message = "Phone number cannot be longer than 32 characters"))]
    pub phone_number: Option<String>,
    pub group_id: i32,
    #[serde(default)]
    pub is_professor: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[validate(length(max = 16))]
    pub sex: Option<String>,
    /// `YYYY-MM-DD`. RFC 3339 timestamps such as `2003-04-05T00:00:00Z` are
    /// accepted too and keep only their date.
    #[serde(deserialize_with = "deserialize_birthdate")]
    #[schema(example = "2003-04-05")]
    #[validate(custom(function = "validate_birthdate"))]
    pub birthdate: NaiveDate,
}

fn parse_birthdate(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|at| at.date_naive()))
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_birthdate(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid birthdate `{raw}`, expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}

pub fn validate_birthdate(birthdate: &NaiveDate) -> Result<(), ValidationError> {
    if *birthdate > Utc::now().date_naive() {
        return Err(ValidationError::new("birthdate")
            .with_message(Cow::Borrowed("Birthdate cannot be in the future")));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Row read at login.
#[derive(Debug, FromRow)]
pub struct PersonCredentials {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

/// Role flags of a person. A person with neither flag is a student.
#[derive(Debug, Clone, Copy, FromRow, PartialEq, Eq)]
pub struct PersonRoles {
    pub is_admin: bool,
    pub is_professor: bool,
}

impl PersonRoles {
    pub fn is_student(&self) -> bool {
        !self.is_admin && !self.is_professor
    }
}

/// Response of `GET /api/check-is-admin-or-professor`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleCheckResponse {
    pub user_id: String,
    pub is_admin: bool,
    pub is_professor: bool,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Student {
    #[serde(rename = "ID")]
    pub id: i32,
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub group_id: i32,
    pub sex: Option<String>,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentIdQuery {
    pub student_id: i32,
}
