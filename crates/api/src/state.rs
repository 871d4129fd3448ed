use std::sync::Arc;
use std::time::Duration;

use hrms_core::listing::{ListingRegistry, RegistryError};
use hrms_db::PgRowStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hrms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Listing specs, built and validated once at startup.
    pub listings: Arc<ListingRegistry>,
    /// Row store and owner directory for listings, sharing `pool`.
    pub row_store: PgRowStore,
}

impl AppState {
    /// Assemble the state, validating the HR listing registry.
    pub fn new(pool: hrms_db::DbPool, config: ServerConfig) -> Result<Self, RegistryError> {
        let listings = ListingRegistry::hr()?;
        let row_store = PgRowStore::new(
            pool.clone(),
            Duration::from_secs(config.listing_query_timeout_secs),
        );
        Ok(Self {
            pool,
            config: Arc::new(config),
            listings: Arc::new(listings),
            row_store,
        })
    }
}
