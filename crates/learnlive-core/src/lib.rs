//! # LearnLive Core
//!
//! Core types, errors, and utilities shared by every LearnLive crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`validation`]: Credential rules applied to sign-up requests
//!
//! # Example
//!
//! ```ignore
//! use learnlive_core::errors::AppError;
//! use learnlive_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Room not found"));
//! let hash = hash_password("s3cretpass")?;
//! ```

pub mod errors;
pub mod password;
pub mod validation;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
