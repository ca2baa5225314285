//! Groups, subjects, rooms and the relations between them.

use fake::Fake;
use fake::faker::lorem::en::Word;
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};
use std::time::Instant;

use super::models::SEED_PREFIX;

/// Names are `seed-<kind>-<word>-<n>`: unique within one run and matched by
/// `clear-seed`. Seeding again requires clearing first.
pub fn generate_names(count: usize, kind: &str) -> Vec<String> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let word: String = Word().fake();
            format!("{SEED_PREFIX}-{kind}-{word}-{}", idx + 1)
        })
        .collect()
}

/// Subjects studied by the group at `group_idx`: a window of
/// `per_group` consecutive subjects starting at the group's index.
pub fn subjects_for_group(group_idx: usize, num_subjects: usize, per_group: usize) -> Vec<usize> {
    if num_subjects == 0 {
        return Vec::new();
    }
    (0..per_group.min(num_subjects))
        .map(|offset| (group_idx + offset) % num_subjects)
        .collect()
}

pub async fn insert_named(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    column: &str,
    names: &[String],
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let start_time = Instant::now();
    let sql =
        format!("INSERT INTO {table} ({column}) SELECT * FROM UNNEST($1::text[]) RETURNING id");
    let ids: Vec<i32> = sqlx::query_scalar(&sql)
        .bind(names)
        .fetch_all(&mut **tx)
        .await?;

    println!(
        "   ✓ Inserted {} rows into {} in {:?}",
        ids.len(),
        table,
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn insert_rooms(
    tx: &mut Transaction<'_, Postgres>,
    subject_ids: &[i32],
    rooms_per_subject: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let (subjects, names): (Vec<i32>, Vec<String>) = subject_ids
        .iter()
        .flat_map(|&subject_id| {
            (1..=rooms_per_subject).map(move |n| (subject_id, format!("Room {n}")))
        })
        .unzip();

    let result = sqlx::query(
        "INSERT INTO room (subject_id, room_name) SELECT * FROM UNNEST($1::int4[], $2::text[])",
    )
    .bind(&subjects)
    .bind(&names)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}

/// Inserts `(left, right)` pairs into a two-column relation table.
pub async fn insert_pairs(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    columns: (&str, &str),
    pairs: &[(i32, i32)],
) -> Result<u64, Box<dyn std::error::Error>> {
    if pairs.is_empty() {
        return Ok(0);
    }

    let (left, right): (Vec<i32>, Vec<i32>) = pairs.iter().copied().unzip();
    let sql = format!(
        "INSERT INTO {table} ({}, {}) SELECT * FROM UNNEST($1::int4[], $2::int4[]) ON CONFLICT DO NOTHING",
        columns.0, columns.1
    );
    let result = sqlx::query(&sql)
        .bind(&left)
        .bind(&right)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected())
}
