use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::groups::model::{
    CreateGroupDto, Group, RESERVED_GROUP_IDS, Student, UpdateGroupDto, is_reserved_group,
};

const DUPLICATE_GROUP: &str = "Group already exists";
const GROUP_NOT_FOUND: &str = "Group not found";
const RESERVED_GROUP: &str = "The professors and administrators groups cannot be changed";

fn ensure_not_reserved(id: i32) -> Result<(), AppError> {
    if is_reserved_group(id) {
        return Err(AppError::forbidden(RESERVED_GROUP));
    }
    Ok(())
}

pub struct GroupService;

impl GroupService {
    /// Study groups, without the professor and administrator pseudo-groups.
    #[instrument(skip(db))]
    pub async fn list_groups(db: &Database) -> Result<Vec<Group>, AppError> {
        db.run(
            sqlx::query_as::<_, Group>(
                "SELECT id, group_name FROM group_uni WHERE id <> ALL($1) ORDER BY id",
            )
            .bind(&RESERVED_GROUP_IDS[..])
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_students_of_group(
        db: &Database,
        group_id: i32,
    ) -> Result<Vec<Student>, AppError> {
        db.run(
            sqlx::query_as::<_, Student>(
                r#"
                SELECT id, username, firstname AS first_name, lastname AS last_name,
                       group_id, sex, birthdate
                FROM person
                WHERE group_id = $1 AND NOT is_admin AND NOT is_professor
                ORDER BY lastname, firstname, id
                "#,
            )
            .bind(group_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db, dto))]
    pub async fn create_group(db: &Database, dto: CreateGroupDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO group_uni (group_name) VALUES ($1)")
                .bind(&dto.group_name)
                .execute(db.pool()),
            DUPLICATE_GROUP,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db, dto), fields(id = dto.id))]
    pub async fn update_group(db: &Database, dto: UpdateGroupDto) -> Result<(), AppError> {
        ensure_not_reserved(dto.id)?;
        db.run_affecting(
            sqlx::query("UPDATE group_uni SET group_name = $1 WHERE id = $2")
                .bind(&dto.group_name)
                .bind(dto.id)
                .execute(db.pool()),
            DUPLICATE_GROUP,
            GROUP_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_group(db: &Database, id: i32) -> Result<(), AppError> {
        ensure_not_reserved(id)?;
        db.run_affecting(
            sqlx::query("DELETE FROM group_uni WHERE id = $1")
                .bind(id)
                .execute(db.pool()),
            DUPLICATE_GROUP,
            GROUP_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
