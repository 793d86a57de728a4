//! Application state - shared across all handlers.

use std::sync::Arc;

use hyperlocal_core::ports::{PostRepository, UserRepository};
use hyperlocal_infra::database::DatabaseConfig;
use hyperlocal_infra::database::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use hyperlocal_infra::database::{PostgresPostRepository, PostgresUserRepository, connect};

/// Shared application state. Handlers share nothing mutable beyond the
/// repositories behind these pointers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(db) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            users: Arc::new(PostgresUserRepository::new(db.clone())),
                            posts: Arc::new(PostgresPostRepository::new(db)),
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
        let _ = db_config;

        tracing::info!("Application state initialized (in-memory)");
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
