//! Items Domain
//!
//! The catalog of collectable waste items. The catalog is seeded by a
//! migration and read-only at runtime; collection points reference it
//! through the `point_items` join table.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::uploads::UploadsConfig;
//! use domain_items::{handlers, repository::InMemoryItemRepository, service::ItemService};
//!
//! let repository = InMemoryItemRepository::with_default_catalog();
//! let service = ItemService::new(repository, UploadsConfig::default());
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use models::{Item, ItemResponse};
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
