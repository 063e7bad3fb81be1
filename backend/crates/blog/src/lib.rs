//! Blog Post Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, draft value object, repository trait
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Contract
//! - The store is the sole owner of persisted post state; handlers hold
//!   request-scoped copies only
//! - One SQL statement per operation, no multi-statement transactions
//! - Identifiers and `created_at` are assigned by the database and never
//!   change afterwards

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::blog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
