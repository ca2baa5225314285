pub use learnlive_models::common::{ErrorResponse, IdQuery, MessageResponse};
pub use learnlive_models::groups::*;
pub use learnlive_models::persons::Student;
