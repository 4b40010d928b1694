//! Application context shared by all non-auth command handlers.

use anyhow::Context;

use nest_config::NestConfig;
use nest_core::identity::UserIdentity;
use nest_db::store::NestStore;
use nest_manager::TaskManager;
use nest_remote::RemoteClient;
use nest_search::SearchEngine;

use crate::session;

/// Resolved identity plus the manager and search engine over a shared remote
/// client.
pub struct AppContext {
    pub user: UserIdentity,
    pub manager: TaskManager,
    pub search: SearchEngine,
}

impl AppContext {
    /// Resolve the session, open the store, and wire up the remote clients.
    ///
    /// # Errors
    ///
    /// Fails with `NotAuthenticated` when no session is active, with a config
    /// error when the backend section is incomplete, and with a store error
    /// when the database cannot be opened.
    pub async fn init(config: NestConfig) -> anyhow::Result<Self> {
        let user = session::current()?;

        let backend = config.require_backend()?;
        let remote = RemoteClient::new(&backend.url, &backend.anon_key);

        let store = NestStore::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self {
            user,
            manager: TaskManager::new(store, remote.clone()),
            search: SearchEngine::new(remote),
        })
    }
}
