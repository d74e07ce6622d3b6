pub mod api;
pub mod config;
pub mod session;

// Re-exports
pub use api::*;
pub use config::*;
pub use session::*;
