//! # LearnLive CLI
//!
//! Administrative tasks and database seeding for LearnLive development.
//!
//! ## Usage
//!
//! ```ignore
//! use learnlive_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(4); // 4 study groups with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
