pub mod chart;
pub mod commands;
pub mod state;

pub use chart::*;
pub use commands::*;
pub use state::*;
