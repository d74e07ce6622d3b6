//! RepoDeck application library
//!
//! This exposes the public API of the RepoDeck application for testing and
//! external usage.

pub mod adapters;
pub mod cli;
pub mod services;
pub mod tui;
