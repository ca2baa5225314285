pub use learnlive_models::common::{ErrorResponse, IdQuery, MessageResponse};
pub use learnlive_models::rooms::*;
pub use learnlive_models::subjects::SubjectIdQuery;
