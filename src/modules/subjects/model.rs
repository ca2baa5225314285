pub use learnlive_models::common::{ErrorResponse, IdQuery, MessageResponse};
pub use learnlive_models::persons::StudentIdQuery;
pub use learnlive_models::subjects::*;
