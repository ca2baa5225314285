use anyhow::Context;
use learnlive_config::{CorsConfig, DatabaseConfig, JwtConfig, VideoConfig};
use learnlive_db::{Database, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub jwt_config: JwtConfig,
    pub video_config: VideoConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config)
        .await
        .context("Error connecting to database")?;

    Ok(AppState {
        db: Database::new(pool, database_config.query_time_limit),
        jwt_config: JwtConfig::from_env()?,
        video_config: VideoConfig::from_env()?,
        cors_config: CorsConfig::from_env(),
    })
}
