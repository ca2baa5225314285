//! Authentication and authorization for request handlers.
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor. It reads the session cookie,
//!   verifies the token and loads the caller's role flags with one point query.
//! - [`role`]: role lookups and the role guards handlers call with their own
//!   denial message.
//!
//! Ownership predicates (does this professor teach that subject, and so on)
//! live in [`crate::utils::auth_helpers`].
//!
//! # Example
//!
//! ```ignore
//! async fn add_subject(
//!     State(state): State<AppState>,
//!     auth_user: AuthUser,
//!     ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
//! ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
//!     auth_user.require_admin("You do not have administrator privileges to add subjects")?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
