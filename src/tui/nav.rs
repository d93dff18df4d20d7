//! Screen navigation state

use tracing::debug;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Add,
    List,
    Edit,
    Delete,
}

impl Screen {
    /// Human-readable screen name for the status bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Add => "Add Movie",
            Screen::List => "Movie List",
            Screen::Edit => "Edit Movie",
            Screen::Delete => "Delete Movie",
        }
    }
}

/// Owns the identity of the active screen.
///
/// Every transition is legal from every screen; `go_to` switches
/// unconditionally. Home is the initial screen and the universal return
/// target.
#[derive(Debug)]
pub struct Navigator {
    active: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            active: Screen::Home,
        }
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn go_to(&mut self, screen: Screen) {
        debug!(from = ?self.active, to = ?screen, "navigate");
        self.active = screen;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(Navigator::new().active(), Screen::Home);
    }

    #[test]
    fn every_screen_returns_to_home() {
        for screen in [Screen::Add, Screen::List, Screen::Edit, Screen::Delete] {
            let mut nav = Navigator::new();
            nav.go_to(screen);
            assert_eq!(nav.active(), screen);
            nav.go_to(Screen::Home);
            assert_eq!(nav.active(), Screen::Home);
        }
    }
}
