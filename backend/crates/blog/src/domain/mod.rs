//! Domain Layer - Business entities and contracts
//!
//! This layer contains:
//! - Domain entities (Post)
//! - Domain value objects (PostDraft)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
