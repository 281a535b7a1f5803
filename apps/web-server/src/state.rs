//! Application state - shared across all handlers.

use std::sync::Arc;

use blogicum_core::BlogService;
use blogicum_infra::database::{DatabaseConfig, InMemoryBlogStore};

#[cfg(feature = "postgres")]
use blogicum_infra::database::{
    DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    /// Which store backs the site, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store when
    /// no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let posts =
                            Arc::new(PostgresPostRepository::new(Arc::clone(&connections.main)));
                        let categories =
                            Arc::new(PostgresCategoryRepository::new(connections.main));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            blog: BlogService::new(posts, categories),
                            storage: "postgres",
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
        }

        Self::in_memory(Arc::new(InMemoryBlogStore::new()))
    }

    /// State backed by an in-memory store.
    pub fn in_memory(store: Arc<InMemoryBlogStore>) -> Self {
        Self {
            blog: BlogService::new(store.clone(), store),
            storage: "memory",
        }
    }
}
