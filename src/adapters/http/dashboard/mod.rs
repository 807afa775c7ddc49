//! Dashboard HTTP adapter - session entry and plan landing areas.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, PageResponse};
pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
