//! Seeding configuration and row shapes.

use chrono::NaiveDate;

/// Prefix marking seeded usernames, group names and subject names so that
/// `clear-seed` removes nothing else.
pub const SEED_PREFIX: &str = "seed";

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

pub struct PersonSeed {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub group_id: i32,
    pub is_professor: bool,
    pub sex: String,
    pub birthdate: NaiveDate,
}

/// How much data a seed run creates.
#[derive(Clone)]
pub struct SeedConfig {
    pub num_groups: usize,
    pub num_subjects: usize,
    pub num_professors: usize,
    pub students_per_group: usize,
    pub subjects_per_group: usize,
    pub rooms_per_subject: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_groups: 4,
            num_subjects: 8,
            num_professors: 6,
            students_per_group: 20,
            subjects_per_group: 4,
            rooms_per_subject: 2,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration for `num_groups` study groups, other counts
    /// left at their defaults.
    pub fn new(num_groups: usize) -> Self {
        Self {
            num_groups,
            ..Default::default()
        }
    }

    pub fn with_subjects(mut self, num_subjects: usize, subjects_per_group: usize) -> Self {
        self.num_subjects = num_subjects;
        self.subjects_per_group = subjects_per_group.min(num_subjects);
        self
    }

    pub fn with_professors(mut self, num_professors: usize) -> Self {
        self.num_professors = num_professors;
        self
    }

    pub fn with_students(mut self, students_per_group: usize) -> Self {
        self.students_per_group = students_per_group;
        self
    }

    pub fn with_rooms(mut self, rooms_per_subject: usize) -> Self {
        self.rooms_per_subject = rooms_per_subject;
        self
    }

    pub fn total_students(&self) -> usize {
        self.num_groups * self.students_per_group
    }
}
