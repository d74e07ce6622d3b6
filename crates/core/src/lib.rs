//! RepoDeck Core - Pure domain logic with no external dependencies
//!
//! This crate contains the business logic, domain types, and ports
//! (interfaces) for RepoDeck. It has no dependencies on UI frameworks,
//! HTTP clients, or filesystem operations - those are handled by adapters.

pub mod app;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
