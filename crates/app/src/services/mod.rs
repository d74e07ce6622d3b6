pub mod dashboard_service;
pub mod session_guard;

pub use dashboard_service::DashboardService;
pub use session_guard::SessionGuard;
