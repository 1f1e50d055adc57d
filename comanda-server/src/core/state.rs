use anyhow::Context;

use crate::catalog::CatalogService;
use crate::core::Config;
use crate::inventory::InventoryService;
use crate::orders::OrderService;
use crate::reports::ReportService;
use crate::store::Store;

/// Shared server state, one clone per request handler
///
/// Holds the configuration, the store, and the service singletons. Every
/// field is cheap to clone: the store is an `Arc` over the database and the
/// services hold clones of it.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Store,
    pub inventory: InventoryService,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub reports: ReportService,
}

impl ServerState {
    /// Open the store under the configured data directory and wire services
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating data directory {}", config.data_dir))?;
        let store = Store::open(config.database_path())
            .with_context(|| format!("opening database {}", config.database_path().display()))?;
        tracing::info!(path = %config.database_path().display(), "Database ready");
        Ok(Self::with_store(config.clone(), store))
    }

    /// Wire services over an already-open store
    ///
    /// Tests use this with the in-memory backend.
    pub fn with_store(config: Config, store: Store) -> Self {
        let catalog = CatalogService::new(store.clone());
        let inventory = InventoryService::new(store.clone(), catalog.clone());
        let orders = OrderService::new(store.clone(), catalog.clone(), inventory.clone());
        let reports = ReportService::new(store.clone());
        Self {
            config,
            store,
            inventory,
            catalog,
            orders,
            reports,
        }
    }
}
