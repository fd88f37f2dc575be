//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::PostRepository;
use scribe_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use scribe_infra::database::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let posts = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        tracing::info!("Application state initialized (postgres store)");
                        return Self {
                            posts,
                            db: Some(conn),
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

        Self::in_memory()
    }

    /// State backed by the in-memory store. The fallback path, also used by
    /// handler tests.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Explicit shutdown counterpart to `new` - closes the store connection.
    pub async fn shutdown(&self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }
}
