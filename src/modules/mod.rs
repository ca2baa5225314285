pub mod auth;
pub mod grades;
pub mod group_subjects;
pub mod groups;
pub mod professor_groups;
pub mod professor_subjects;
pub mod rooms;
pub mod subjects;
pub mod total_grades;
pub mod video;
