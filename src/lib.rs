//! # LearnLive API
//!
//! Backend for a university learning-management application, built with
//! Axum and PostgreSQL. It manages persons (administrators, professors and
//! students), study groups, subjects, video rooms, per-lesson grades with
//! attendance, and final grades, and it issues access tokens for a
//! LiveKit-compatible video server.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Session extractor and role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/              # Signup, login, role check
//! │   ├── subjects/          # Subjects
//! │   ├── rooms/             # Video rooms per subject
//! │   ├── groups/            # Study groups
//! │   ├── group_subjects/    # Group <-> subject relation
//! │   ├── professor_subjects/# Professor <-> subject relation
//! │   ├── professor_groups/  # Professor <-> group relation
//! │   ├── grades/            # Per-lesson grades and attendance
//! │   ├── total_grades/      # Final grades
//! │   └── video/             # Room token issuer
//! └── utils/            # Ownership predicates, cookies
//! ```
//!
//! Each feature module has the same layout:
//!
//! - `controller.rs`: HTTP handlers with OpenAPI annotations
//! - `service.rs`: SQL and business rules
//! - `model.rs`: re-exports of the DTOs from `learnlive-models`
//! - `router.rs`: Axum routes
//!
//! ## Roles
//!
//! | Role | Stored as | Can |
//! |------|-----------|-----|
//! | Administrator | `is_admin` | Manage accounts, catalog and relations |
//! | Professor | `is_professor` | Grade students of the groups and subjects they teach |
//! | Student | neither flag | Read own subjects and grades |
//!
//! The first administrator is created with `learnlive-cli create-admin`.
//!
//! ## Sessions
//!
//! `POST /api/login` sets a cookie (named by `JWT_NAME`) holding an HS256
//! token. Its `iss` claim is the person id and its `sub` claim a display
//! name. Every other endpoint reads that cookie and re-checks the person's
//! roles in the database.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:<PORT>/swagger-ui`
//! - Scalar: `http://localhost:<PORT>/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

pub use learnlive_auth;
pub use learnlive_config;
pub use learnlive_core;
pub use learnlive_db;
pub use learnlive_models;
