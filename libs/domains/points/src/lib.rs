//! Points Domain
//!
//! Waste-collection points and their association with the collectable item
//! catalog. A point is registered with a non-empty set of item ids; both the
//! point row and its `point_items` association rows are written in one
//! transaction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::uploads::UploadsConfig;
//! use domain_points::{
//!     handlers,
//!     repository::InMemoryPointRepository,
//!     service::PointService,
//! };
//!
//! let repository = InMemoryPointRepository::with_default_catalog();
//! let service = PointService::new(repository, UploadsConfig::default());
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
pub use error::{PointError, PointResult};
pub use models::{
    CreatePoint, Point, PointDetailResponse, PointFilter, PointListFilter, PointResponse,
    PointWithItems,
};
pub use postgres::PgPointRepository;
pub use repository::{InMemoryPointRepository, PointRepository};
pub use service::PointService;
