pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::grades::*;
pub use learnlive_models::groups::GroupIdQuery;
