//! Account models re-exported from the `learnlive-models` crate.

pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::persons::*;
