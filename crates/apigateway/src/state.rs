use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::ConnectionManager;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(database_url: &str, run_migrations: bool) -> Result<Self> {
        let db_pool = ConnectionManager::new_pool(database_url, run_migrations)
            .await
            .context("Failed to initialize database pool")?;

        let di_container = DependenciesInject::new(db_pool)
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
