pub use learnlive_models::common::ErrorResponse;
pub use learnlive_models::rooms::RoomIdQuery;
pub use learnlive_models::video::*;
