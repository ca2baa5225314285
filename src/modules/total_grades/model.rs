pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::grades::GradeRowQuery;
pub use learnlive_models::groups::GroupIdQuery;
pub use learnlive_models::persons::StudentIdQuery;
pub use learnlive_models::total_grades::*;
