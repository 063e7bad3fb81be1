//! Infrastructure Layer - Persistence implementations

pub mod postgres;
