//! Terminal user interface for the movie catalog
//!
//! One screen is active at a time. Each screen owns only its transient input
//! state and reports what happened as an [`Action`]; the [`App`] controller
//! owns the navigator and the catalog and is the only place that mutates
//! either.

pub mod app;
pub mod events;
pub mod nav;
pub mod screens;
pub mod ui;

pub use app::App;
pub use events::Action;
pub use nav::{Navigator, Screen};
