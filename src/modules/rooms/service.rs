use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::rooms::model::{CreateRoomDto, Room, SubjectRoom, UpdateRoomDto};

const DUPLICATE_ROOM: &str = "Room with such name already exists for this subject";
const ROOM_NOT_FOUND: &str = "Room not found";

pub struct RoomService;

impl RoomService {
    #[instrument(skip(db))]
    pub async fn list_rooms(db: &Database) -> Result<Vec<SubjectRoom>, AppError> {
        db.run(
            sqlx::query_as::<_, SubjectRoom>(
                r#"
                SELECT r.id, r.subject_id, s.subject_name, r.room_name
                FROM room r
                LEFT JOIN subject s ON r.subject_id = s.id
                ORDER BY r.subject_id, r.id
                "#,
            )
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_rooms_of_subject(
        db: &Database,
        subject_id: i32,
    ) -> Result<Vec<Room>, AppError> {
        db.run(
            sqlx::query_as::<_, Room>(
                "SELECT id, subject_id, room_name FROM room WHERE subject_id = $1 ORDER BY id",
            )
            .bind(subject_id)
            .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn find_room(db: &Database, id: i32) -> Result<Room, AppError> {
        db.run(
            sqlx::query_as::<_, Room>("SELECT id, subject_id, room_name FROM room WHERE id = $1")
                .bind(id)
                .fetch_optional(db.pool()),
        )
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!(ROOM_NOT_FOUND)))
    }

    #[instrument(skip(db, dto), fields(subject_id = dto.subject_id))]
    pub async fn create_room(db: &Database, dto: CreateRoomDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO room (subject_id, room_name) VALUES ($1, $2)")
                .bind(dto.subject_id)
                .bind(&dto.room_name)
                .execute(db.pool()),
            DUPLICATE_ROOM,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db, dto), fields(id = dto.id))]
    pub async fn update_room(db: &Database, dto: UpdateRoomDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("UPDATE room SET subject_id = $1, room_name = $2 WHERE id = $3")
                .bind(dto.subject_id)
                .bind(&dto.room_name)
                .bind(dto.id)
                .execute(db.pool()),
            DUPLICATE_ROOM,
            ROOM_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_room(db: &Database, id: i32) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("DELETE FROM room WHERE id = $1")
                .bind(id)
                .execute(db.pool()),
            DUPLICATE_ROOM,
            ROOM_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
