//! # LearnLive Models
//!
//! Rows, request DTOs and query parameter types for every LearnLive
//! resource. JSON field names follow the public API (`firstName`,
//! `lastName`, `ID` on students); database column names are aliased in the
//! SQL where they differ.

pub mod common;
pub mod grades;
pub mod group_subjects;
pub mod groups;
pub mod persons;
pub mod professor_groups;
pub mod professor_subjects;
pub mod professors;
pub mod rooms;
pub mod subjects;
pub mod total_grades;
pub mod video;

pub use common::{ErrorResponse, IdQuery, MessageResponse};
pub use groups::{
    ADMINISTRATORS_GROUP_ID, Group, PROFESSORS_GROUP_ID, RESERVED_GROUP_IDS, is_reserved_group,
};
pub use persons::{LoginRequest, PersonRoles, RoleCheckResponse, SignupRequest, Student};
pub use professors::Professor;
pub use subjects::Subject;
