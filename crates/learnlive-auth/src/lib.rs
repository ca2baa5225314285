//! # LearnLive Auth
//!
//! Signed tokens used by the LearnLive API:
//!
//! - **Session tokens** ([`jwt`]): HS256, issued at login and carried in a
//!   cookie. The issuer claim holds the person id, the subject a display
//!   string naming the person.
//! - **Room tokens** ([`room`]): HS256 credentials with a video grant,
//!   accepted by a LiveKit-compatible media server.
//!
//! # Example
//!
//! ```ignore
//! use learnlive_auth::{create_session_token, verify_session_token};
//!
//! let token = create_session_token(42, "Doe John (jdoe ID: 42)", &jwt_config)?;
//! let claims = verify_session_token(&token, &jwt_config)?;
//! assert_eq!(claims.person_id()?, 42);
//! ```

pub mod claims;
pub mod jwt;
pub mod room;

pub use claims::{Claims, RoomClaims, VideoGrant, session_subject};
pub use jwt::{create_session_token, verify_session_token};
pub use room::generate_room_token;
