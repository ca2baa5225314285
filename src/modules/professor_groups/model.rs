pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::groups::GroupIdQuery;
pub use learnlive_models::professor_groups::*;
pub use learnlive_models::professors::ProfessorIdQuery;
