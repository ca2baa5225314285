pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::group_subjects::*;
pub use learnlive_models::groups::GroupIdQuery;
pub use learnlive_models::subjects::SubjectIdQuery;
