use learnlive_core::AppError;
use learnlive_db::Database;
use tracing::instrument;

use crate::modules::group_subjects::model::{
    GroupSubject, GroupSubjectDto, UpdateGroupSubjectDto,
};

const DUPLICATE_RELATION: &str = "Group Subject relation already exists";
const RELATION_NOT_FOUND: &str = "Group Subject relation not found";

const SELECT_RELATIONS: &str = r#"
    SELECT gs.group_id, g.group_name, gs.subject_id, s.subject_name
    FROM group_subject gs
    JOIN group_uni g ON gs.group_id = g.id
    JOIN subject s ON gs.subject_id = s.id
"#;

pub struct GroupSubjectService;

impl GroupSubjectService {
    #[instrument(skip(db))]
    pub async fn list_relations(db: &Database) -> Result<Vec<GroupSubject>, AppError> {
        let sql = format!("{SELECT_RELATIONS} ORDER BY gs.group_id, gs.subject_id");
        db.run(sqlx::query_as::<_, GroupSubject>(&sql).fetch_all(db.pool()))
            .await
    }

    #[instrument(skip(db))]
    pub async fn list_by_group(
        db: &Database,
        group_id: i32,
    ) -> Result<Vec<GroupSubject>, AppError> {
        let sql = format!("{SELECT_RELATIONS} WHERE gs.group_id = $1 ORDER BY gs.subject_id");
        db.run(
            sqlx::query_as::<_, GroupSubject>(&sql)
                .bind(group_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_by_subject(
        db: &Database,
        subject_id: i32,
    ) -> Result<Vec<GroupSubject>, AppError> {
        let sql = format!("{SELECT_RELATIONS} WHERE gs.subject_id = $1 ORDER BY gs.group_id");
        db.run(
            sqlx::query_as::<_, GroupSubject>(&sql)
                .bind(subject_id)
                .fetch_all(db.pool()),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn create_relation(db: &Database, dto: GroupSubjectDto) -> Result<(), AppError> {
        db.run_write(
            sqlx::query("INSERT INTO group_subject (group_id, subject_id) VALUES ($1, $2)")
                .bind(dto.group_id)
                .bind(dto.subject_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn update_relation(
        db: &Database,
        dto: UpdateGroupSubjectDto,
    ) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query(
                r#"
                UPDATE group_subject SET group_id = $1, subject_id = $2
                WHERE group_id = $3 AND subject_id = $4
                "#,
            )
            .bind(dto.new_group_id)
            .bind(dto.new_subject_id)
            .bind(dto.old_group_id)
            .bind(dto.old_subject_id)
            .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_relation(db: &Database, dto: GroupSubjectDto) -> Result<(), AppError> {
        db.run_affecting(
            sqlx::query("DELETE FROM group_subject WHERE group_id = $1 AND subject_id = $2")
                .bind(dto.group_id)
                .bind(dto.subject_id)
                .execute(db.pool()),
            DUPLICATE_RELATION,
            RELATION_NOT_FOUND,
        )
        .await?;
        Ok(())
    }
}
