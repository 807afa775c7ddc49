//! Public pages HTTP adapter - marketing site endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::PageResponse;
pub use handlers::PagesAppState;
pub use routes::pages_routes;
