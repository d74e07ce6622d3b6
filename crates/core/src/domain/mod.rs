pub mod article;
pub mod events;
pub mod metrics;
pub mod repo;

pub use article::*;
pub use events::*;
pub use metrics::*;
pub use repo::*;
