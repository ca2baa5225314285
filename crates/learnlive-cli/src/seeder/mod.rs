//! Fake data for development databases.
//!
//! Everything seeded carries the `seed` prefix (usernames `seedprof<n>` and
//! `seedstud<n>`, names `seed-...`), which is what [`clear_all`] matches on.
//! All seeded accounts share the password [`SEED_PASSWORD`].

pub mod catalog;
pub mod models;
pub mod persons;

use learnlive_core::hash_password;
use sqlx::PgPool;
use std::time::Instant;

pub use models::{SEED_PASSWORD, SEED_PREFIX, SeedConfig};

/// Seeds groups, subjects, rooms, professors, students and the
/// group-subject, professor-subject and professor-group relations in one
/// transaction.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} groups, {} subjects, {} professors and {} students...",
        config.num_groups,
        config.num_subjects,
        config.num_professors,
        config.total_students()
    );

    let existing = count_seeded_persons(db).await?;
    if existing > 0 {
        return Err(format!(
            "database already holds {existing} seeded accounts, run `clear-seed` first"
        )
        .into());
    }

    let password_hash = hash_password(SEED_PASSWORD).map_err(|e| e.error.to_string())?;
    let mut tx = db.begin().await?;

    println!("📚 Catalog");
    let group_ids = catalog::insert_named(
        &mut tx,
        "group_uni",
        "group_name",
        &catalog::generate_names(config.num_groups, "group"),
    )
    .await?;
    let subject_ids = catalog::insert_named(
        &mut tx,
        "subject",
        "subject_name",
        &catalog::generate_names(config.num_subjects, "subject"),
    )
    .await?;
    let rooms = catalog::insert_rooms(&mut tx, &subject_ids, config.rooms_per_subject).await?;
    println!("   ✓ Inserted {} rooms", rooms);

    println!("👥 Persons");
    let professor_ids = persons::insert_persons(
        &mut tx,
        &persons::generate_professors(config.num_professors),
        &password_hash,
    )
    .await?;
    persons::insert_persons(
        &mut tx,
        &persons::generate_students(&group_ids, config.students_per_group),
        &password_hash,
    )
    .await?;

    println!("🔗 Relations");
    let relations = plan_relations(&config, &group_ids, &subject_ids, &professor_ids);
    let group_subjects = catalog::insert_pairs(
        &mut tx,
        "group_subject",
        ("group_id", "subject_id"),
        &relations.group_subjects,
    )
    .await?;
    let professor_subjects = catalog::insert_pairs(
        &mut tx,
        "professor_subject",
        ("professor_id", "subject_id"),
        &relations.professor_subjects,
    )
    .await?;
    let professor_groups = catalog::insert_pairs(
        &mut tx,
        "professor_group",
        ("professor_id", "group_id"),
        &relations.professor_groups,
    )
    .await?;
    let inserted = group_subjects + professor_subjects + professor_groups;
    println!("   ✓ Inserted {} relation rows", inserted);

    tx.commit().await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    println!("   Seeded accounts log in with password '{}'", SEED_PASSWORD);
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RelationPlan {
    pub group_subjects: Vec<(i32, i32)>,
    pub professor_subjects: Vec<(i32, i32)>,
    pub professor_groups: Vec<(i32, i32)>,
}

/// Decides which relations to create. Every professor gets one group and
/// the first two subjects of that group's program, so each professor can
/// grade the students of their group.
pub fn plan_relations(
    config: &SeedConfig,
    group_ids: &[i32],
    subject_ids: &[i32],
    professor_ids: &[i32],
) -> RelationPlan {
    let mut plan = RelationPlan::default();
    if group_ids.is_empty() || subject_ids.is_empty() {
        return plan;
    }

    let programs: Vec<Vec<i32>> = (0..group_ids.len())
        .map(|group_idx| {
            catalog::subjects_for_group(group_idx, subject_ids.len(), config.subjects_per_group)
                .into_iter()
                .map(|subject_idx| subject_ids[subject_idx])
                .collect()
        })
        .collect();

    for (group_id, program) in group_ids.iter().zip(&programs) {
        plan.group_subjects
            .extend(program.iter().map(|&subject_id| (*group_id, subject_id)));
    }

    for (idx, &professor_id) in professor_ids.iter().enumerate() {
        let group_idx = idx % group_ids.len();
        plan.professor_groups.push((professor_id, group_ids[group_idx]));
        plan.professor_subjects.extend(
            programs[group_idx]
                .iter()
                .take(2)
                .map(|&subject_id| (professor_id, subject_id)),
        );
    }

    plan
}

/// Removes every seeded row. Relations, rooms and grades go with their
/// parents through `ON DELETE CASCADE`.
fn seeded_username_pattern() -> String {
    format!("^{SEED_PREFIX}(prof|stud)[0-9]+$")
}

async fn count_seeded_persons(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM person WHERE username ~ $1")
        .bind(seeded_username_pattern())
        .fetch_one(db)
        .await
}

pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let mut tx = db.begin().await?;

    let persons = sqlx::query("DELETE FROM person WHERE username ~ $1")
        .bind(seeded_username_pattern())
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let subjects = sqlx::query("DELETE FROM subject WHERE subject_name LIKE $1")
        .bind(format!("{SEED_PREFIX}-subject-%"))
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let groups = sqlx::query("DELETE FROM group_uni WHERE group_name LIKE $1")
        .bind(format!("{SEED_PREFIX}-group-%"))
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    println!(
        "   ✓ Deleted {} persons, {} subjects and {} groups in {:?}",
        persons,
        subjects,
        groups,
        start_time.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professors_teach_subjects_of_their_group() {
        let config = SeedConfig::new(2).with_subjects(3, 2);
        let plan = plan_relations(&config, &[10, 11], &[100, 101, 102], &[1, 2, 3]);

        assert_eq!(
            plan.group_subjects,
            vec![(10, 100), (10, 101), (11, 101), (11, 102)]
        );
        assert_eq!(plan.professor_groups, vec![(1, 10), (2, 11), (3, 10)]);

        for &(professor_id, group_id) in &plan.professor_groups {
            let taught = plan
                .professor_subjects
                .iter()
                .filter(|(p, _)| *p == professor_id);
            for &(_, subject_id) in taught {
                assert!(plan.group_subjects.contains(&(group_id, subject_id)));
            }
        }
    }

    #[test]
    fn test_seeded_username_pattern_matches_only_seeded_accounts() {
        let pattern = regex::Regex::new(&seeded_username_pattern()).unwrap();
        let seeded = persons::generate_professors(2)
            .into_iter()
            .chain(persons::generate_students(&[10], 2));

        for person in seeded {
            assert!(pattern.is_match(&person.username), "{}", person.username);
        }
        assert!(!pattern.is_match("seedling"));
        assert!(!pattern.is_match("seedprof1x"));
        assert!(!pattern.is_match("admin"));
    }

    #[test]
    fn test_no_groups_means_no_relations() {
        let plan = plan_relations(&SeedConfig::new(0), &[], &[1, 2], &[7]);
        assert_eq!(plan, RelationPlan::default());
    }
}
