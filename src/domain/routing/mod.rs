//! Routing module - Plan-aware dashboard access routing.
//!
//! Maps a resolved user's plan tier to exactly one landing destination and
//! models the redirect as a one-shot terminal transition.

mod destination;
mod entry;

pub use destination::Destination;
pub use entry::{EntryPhase, Redirected, SessionEntry};
