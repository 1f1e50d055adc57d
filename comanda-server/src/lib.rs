//! Comanda Server - restaurant point-of-sale backend
//!
//! # Architecture overview
//!
//! - **Store** (`store`): embedded redb database, one file, serialized
//!   write transactions
//! - **Inventory** (`inventory`): raw material stock, soft deletion with
//!   product cascade, atomic check-and-reserve
//! - **Catalog** (`catalog`): products with recipes and computed
//!   availability
//! - **Orders** (`orders`): the placement transaction
//!   (validate, deduct, persist, all-or-nothing) and order history
//! - **Reports** (`reports`): dashboard aggregation
//! - **HTTP API** (`api`): RESTful routes under `/api`
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── store/         # redb tables and accessors
//! ├── inventory/     # raw material service
//! ├── catalog/       # product service
//! ├── orders/        # order service, money arithmetic
//! ├── reports/       # dashboard service
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod inventory;
pub mod orders;
pub mod reports;
pub mod store;
pub mod utils;

// Re-export the public surface
pub use catalog::CatalogService;
pub use core::{Config, Server, ServerState};
pub use inventory::InventoryService;
pub use orders::OrderService;
pub use reports::ReportService;
pub use store::Store;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                                 __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
