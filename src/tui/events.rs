//! Actions produced by screen event handling
//!
//! Screens never touch the navigator or the catalog themselves. Handling a
//! key press yields exactly one `Action`, which the controller applies
//! synchronously before the next event is read.

use super::nav::Screen;

/// Everything a screen can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change
    None,
    /// Quit the application
    Quit,
    /// Switch the active screen
    Navigate(Screen),
    /// Append a title to the catalog
    Add(String),
    /// Replace every catalog entry equal to `old` with `new`
    Edit { old: String, new: String },
    /// Remove every catalog entry equal to the title
    Delete(String),
}
