//! Navigation module - Static route table for navigation-rendering collaborators.

mod links;

pub use links::{nav_links, NavLink};
