//! Command implementations, one module per subcommand.

pub mod help_lines;
pub mod history;
pub mod init;
pub mod reset;
pub mod run;
pub mod status;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::infrastructure::storage::{create_pool, SqliteStateStore};
use crate::services::StateService;

/// Open the configured state database and rehydrate the aggregate.
pub(crate) async fn open_state(config: &Config) -> Result<StateService> {
    let pool = create_pool(&config.storage.path, config.storage.max_connections)
        .await
        .context("Failed to open the state database")?;
    let store = Arc::new(SqliteStateStore::new(pool));
    Ok(StateService::load(store).await)
}
