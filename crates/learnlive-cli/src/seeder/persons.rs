//! Professor and student accounts.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::*;
use fake::faker::phone_number::en::PhoneNumber;
use learnlive_models::PROFESSORS_GROUP_ID;
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};
use std::time::Instant;

use super::models::{PersonSeed, SEED_PREFIX};

/// Generates professors, all placed in the professors pseudo-group.
pub fn generate_professors(count: usize) -> Vec<PersonSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_person("prof", idx, PROFESSORS_GROUP_ID, true, (1955, 1990)))
        .collect()
}

/// Generates `per_group` students for each study group.
pub fn generate_students(group_ids: &[i32], per_group: usize) -> Vec<PersonSeed> {
    group_ids
        .par_iter()
        .enumerate()
        .flat_map(|(group_idx, &group_id)| {
            (0..per_group)
                .map(|student_idx| {
                    generate_person(
                        "stud",
                        group_idx * 1000 + student_idx,
                        group_id,
                        false,
                        (1998, 2007),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn generate_person(
    role_prefix: &str,
    idx: usize,
    group_id: i32,
    is_professor: bool,
    birth_years: (i32, i32),
) -> PersonSeed {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let username = format!("{SEED_PREFIX}{role_prefix}{idx}");

    let year: i32 = (birth_years.0..birth_years.1).fake();
    let month: u32 = (1..13).fake();
    let day: u32 = (1..29).fake();

    PersonSeed {
        email: format!(
            "{}.{}+{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            username
        ),
        phone_number: PhoneNumber().fake::<String>().chars().take(32).collect(),
        sex: if (0..2).fake::<u8>() == 0 { "male" } else { "female" }.to_string(),
        birthdate: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        username,
        first_name,
        last_name,
        group_id,
        is_professor,
    }
}

/// Inserts persons in one statement per chunk and returns their ids in
/// input order.
pub async fn insert_persons(
    tx: &mut Transaction<'_, Postgres>,
    persons: &[PersonSeed],
    password_hash: &str,
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    // 10 params per person
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(persons.len());

    for chunk in persons.chunks(BATCH_SIZE) {
        all_ids.extend(insert_persons_chunk(tx, chunk, password_hash).await?);
    }

    println!(
        "   ✓ Inserted {} persons in {:?}",
        all_ids.len(),
        start_time.elapsed()
    );
    Ok(all_ids)
}

async fn insert_persons_chunk(
    tx: &mut Transaction<'_, Postgres>,
    persons: &[PersonSeed],
    password_hash: &str,
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    if persons.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO person (username, password, firstname, lastname, email, phone_number, \
         group_id, is_professor, sex, birthdate) VALUES ",
    );

    for i in 0..persons.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 10;
        let params: Vec<String> = (1..=10).map(|n| format!("${}", base + n)).collect();
        query.push('(');
        query.push_str(&params.join(", "));
        query.push(')');
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for person in persons {
        q = q
            .bind(&person.username)
            .bind(password_hash)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(&person.email)
            .bind(&person.phone_number)
            .bind(person.group_id)
            .bind(person.is_professor)
            .bind(&person.sex)
            .bind(person.birthdate);
    }

    let ids: Vec<i32> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}
