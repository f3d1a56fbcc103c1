//! Application state wiring configuration and storage together.
//!
//! `AppState` holds the loaded configuration and the database pool used by
//! every command. Services are generic over the storage/transport traits;
//! commands pin them to the concrete infra implementations created here.

use std::path::PathBuf;

use anyhow::Context;

use frontdesk_infra::config::load_global_config;
use frontdesk_infra::filesystem::resolve_data_dir;
use frontdesk_infra::sqlite::kv::SqliteKvStore;
use frontdesk_infra::sqlite::pool::DatabasePool;
use frontdesk_types::config::GlobalConfig;

/// Shared application state for all CLI commands.
pub struct AppState {
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// the configuration, and open the database.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("frontdesk.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        Ok(Self {
            config,
            data_dir,
            db_pool,
        })
    }

    /// A key-value store handle backed by the shared pool.
    pub fn kv_store(&self) -> SqliteKvStore {
        SqliteKvStore::new(self.db_pool.clone())
    }

    /// Resolve the webhook endpoint from the CLI override or the config.
    pub fn resolve_endpoint(&self, cli_override: Option<String>) -> anyhow::Result<String> {
        cli_override
            .filter(|url| !url.is_empty())
            .or_else(|| {
                (!self.config.webhook_url.is_empty()).then(|| self.config.webhook_url.clone())
            })
            .context(
                "no webhook endpoint configured; set webhook_url in config.toml, \
                 export FRONTDESK_WEBHOOK_URL, or pass --endpoint",
            )
    }
}
