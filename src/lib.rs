//! movietui - a terminal UI for managing an in-memory movie watchlist
//!
//! State lives in two owned objects: the [`catalog::Catalog`] holding the
//! ordered list of titles, and the navigator inside [`tui`] holding the
//! active screen. Screens translate key presses into actions; a single
//! controller applies them.

pub mod catalog;
pub mod config;
pub mod tui;
