pub use learnlive_models::common::{ErrorResponse, MessageResponse};
pub use learnlive_models::professor_subjects::*;
pub use learnlive_models::professors::ProfessorIdQuery;
pub use learnlive_models::subjects::SubjectIdQuery;
