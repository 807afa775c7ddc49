//! HTTP middleware.

mod session;

pub use session::{
    session_middleware, AuthRejection, OptionalAuth, RequireAuth, SessionState,
};
