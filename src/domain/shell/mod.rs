//! Shell module - Fixed wrapper context applied to every rendered page.

mod compose;
mod theme;

pub use compose::{compose, ShellNode, ShellOptions};
pub use theme::ThemeMode;
