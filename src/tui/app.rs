//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use super::events::Action;
use super::nav::{Navigator, Screen};
use super::screens::{AddScreen, DeleteScreen, EditScreen, HomeScreen, ListScreen};
use super::ui::centered_rect;
use crate::catalog::Catalog;

/// Main TUI application state
///
/// Owns the two state objects (navigator and catalog) plus one struct per
/// screen holding that screen's transient input state. All mutation happens
/// in [`App::apply`], one action per key event.
pub struct App {
    /// Active-screen state
    pub nav: Navigator,
    /// Movie catalog, mutated only through its operations
    pub catalog: Catalog,

    // Screen states
    pub home: HomeScreen,
    pub add: AddScreen,
    pub list: ListScreen,
    pub edit: EditScreen,
    pub delete: DeleteScreen,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
}

impl App {
    /// Create the application around an already-seeded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            nav: Navigator::new(),
            catalog,

            home: HomeScreen::new(),
            add: AddScreen::new(),
            list: ListScreen::new(),
            edit: EditScreen::new(),
            delete: DeleteScreen::new(),

            should_quit: false,
            show_help_popup: false,
            status_message: None,
        }
    }

    /// Run the main application loop: draw, block on one key event, apply.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one keyboard event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global help toggle. '?' only counts on screens without free text
        // input; on Add/Edit it is an ordinary character.
        let text_screen = matches!(self.nav.active(), Screen::Add | Screen::Edit);
        match key.code {
            KeyCode::F(1) => {
                self.show_help_popup = !self.show_help_popup;
                return;
            }
            KeyCode::Char('?') if !text_screen => {
                self.show_help_popup = !self.show_help_popup;
                return;
            }
            KeyCode::Esc if self.show_help_popup => {
                self.show_help_popup = false;
                return;
            }
            _ => {}
        }

        if self.show_help_popup {
            return;
        }

        let action = match self.nav.active() {
            Screen::Home => self.home.handle_key(key),
            Screen::Add => self.add.handle_key(key),
            Screen::List => self.list.handle_key(key),
            Screen::Edit => self.edit.handle_key(key),
            Screen::Delete => self.delete.handle_key(key),
        };

        self.apply(action);
    }

    /// Apply one action to the owned state.
    ///
    /// Guarded operations that fail their precondition (blank titles) leave
    /// every piece of state untouched, including the active screen.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Action::Navigate(screen) => {
                self.navigate_to(screen);
            }
            Action::Add(title) => {
                if self.catalog.add(&title) {
                    let title = title.trim().to_string();
                    info!(%title, "movie added");
                    self.navigate_to(Screen::Home);
                    self.set_status(format!("Added \"{title}\""));
                }
            }
            Action::Edit { old, new } => {
                if let Some(replaced) = self.catalog.edit(&old, &new) {
                    let (old, new) = (old.trim().to_string(), new.trim().to_string());
                    info!(%old, %new, replaced, "movie edited");
                    self.navigate_to(Screen::Home);
                    if replaced > 0 {
                        self.set_status(format!("Renamed \"{old}\" to \"{new}\""));
                    }
                }
            }
            Action::Delete(title) => {
                let removed = self.catalog.delete(&title);
                info!(%title, removed, "movie deleted");
                self.navigate_to(Screen::Home);
                if removed > 0 {
                    self.set_status(format!("Deleted \"{title}\""));
                }
            }
        }
    }

    /// Switch the active screen.
    ///
    /// The screen being left drops its transient state; List and Delete get
    /// a fresh catalog snapshot on entry. Navigation clears the status line.
    fn navigate_to(&mut self, screen: Screen) {
        match self.nav.active() {
            Screen::Home => self.home.reset(),
            Screen::Add => self.add.reset(),
            Screen::List => self.list.reset(),
            Screen::Edit => self.edit.reset(),
            Screen::Delete => self.delete.reset(),
        }

        self.nav.go_to(screen);
        self.status_message = None;

        match screen {
            Screen::List => self.list.set_titles(self.catalog.titles().to_vec()),
            Screen::Delete => self.delete.set_titles(self.catalog.titles().to_vec()),
            _ => {}
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Main layout: status bar at bottom, content area above
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        match self.nav.active() {
            Screen::Home => self.home.draw(f, chunks[0]),
            Screen::Add => self.add.draw(f, chunks[0]),
            Screen::List => self.list.draw(f, chunks[0]),
            Screen::Edit => self.edit.draw(f, chunks[0]),
            Screen::Delete => self.delete.draw(f, chunks[0]),
        }

        self.draw_status_bar(f, chunks[1]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if let Some(ref msg) = self.status_message {
            msg.clone()
        } else {
            format!(
                "movietui - {} | Esc: back | F1: help",
                self.nav.active().title()
            )
        };

        let style = if self.status_message.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.context_help())
            .block(
                Block::default()
                    .title("Help - Key Bindings")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }

    fn context_help(&self) -> String {
        let global_help = "Global:\n\
            F1 - Toggle this help\n\
            Esc - Back / close popup\n\n";

        let screen_help = match self.nav.active() {
            Screen::Home => {
                "Home:\n\
                ↑/↓ - Navigate menu\n\
                Enter - Select option\n\
                a/l/e/d - Direct access\n\
                q - Quit"
            }
            Screen::Add => {
                "Add Movie:\n\
                Type the title\n\
                Enter - Add and return home\n\
                Blank input is ignored"
            }
            Screen::List => {
                "Movie List:\n\
                ↑/↓ - Move highlight"
            }
            Screen::Edit => {
                "Edit Movie:\n\
                Tab/↑/↓ - Switch field\n\
                Enter - Rename every matching entry\n\
                Blank fields are ignored"
            }
            Screen::Delete => {
                "Delete Movie:\n\
                ↑/↓ - Select title\n\
                Enter - Remove every matching entry"
            }
        };

        format!("{}{}", global_help, screen_help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(key(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(titles: &[&str]) -> App {
        let mut catalog = Catalog::new();
        for title in titles {
            catalog.add(title);
        }
        App::new(catalog)
    }

    #[test]
    fn starts_at_home_with_empty_catalog() {
        let app = App::new(Catalog::new());
        assert_eq!(app.nav.active(), Screen::Home);
        assert!(app.catalog.is_empty());
    }

    #[test]
    fn add_flow_end_to_end() {
        let mut app = App::new(Catalog::new());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.nav.active(), Screen::Add);

        type_text(&mut app, "Inception");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.active(), Screen::Home);
        assert_eq!(app.catalog.titles(), ["Inception"]);
        assert_eq!(app.status_message.as_deref(), Some("Added \"Inception\""));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.nav.active(), Screen::List);
        assert_eq!(app.list.titles.items, ["Inception"]);
    }

    #[test]
    fn blank_add_stays_on_add_screen() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.active(), Screen::Add);

        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.active(), Screen::Add);
        assert!(app.catalog.is_empty());
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn add_input_is_discarded_on_leave() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Dune");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.active(), Screen::Home);
        assert!(app.catalog.is_empty());

        press(&mut app, KeyCode::Char('a'));
        assert!(app.add.input.is_empty());
    }

    #[test]
    fn edit_flow_replaces_all_matches() {
        let mut app = app_with(&["A", "B", "A"]);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.nav.active(), Screen::Edit);

        type_text(&mut app, "A");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Z");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.active(), Screen::Home);
        assert_eq!(app.catalog.titles(), ["Z", "B", "Z"]);
    }

    #[test]
    fn edit_without_match_still_returns_home_silently() {
        let mut app = app_with(&["A", "B"]);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "X");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Z");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.active(), Screen::Home);
        assert_eq!(app.catalog.titles(), ["A", "B"]);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn edit_with_blank_field_stays_on_edit_screen() {
        let mut app = app_with(&["A"]);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "A");
        press(&mut app, KeyCode::Enter); // new title still blank

        assert_eq!(app.nav.active(), Screen::Edit);
        assert_eq!(app.catalog.titles(), ["A"]);
    }

    #[test]
    fn delete_flow_removes_all_matches() {
        let mut app = app_with(&["A", "B", "A"]);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.nav.active(), Screen::Delete);
        assert_eq!(app.delete.titles.items, ["A", "B", "A"]);

        // First entry is selected by default
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.active(), Screen::Home);
        assert_eq!(app.catalog.titles(), ["B"]);
    }

    #[test]
    fn delete_on_empty_catalog_is_a_noop() {
        let mut app = App::new(Catalog::new());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);

        // No selection exists, so nothing happens and the screen stays
        assert_eq!(app.nav.active(), Screen::Delete);
        assert!(app.catalog.is_empty());
    }

    #[test]
    fn esc_returns_home_from_every_screen() {
        for shortcut in ['a', 'l', 'e', 'd'] {
            let mut app = App::new(Catalog::new());
            press(&mut app, KeyCode::Char(shortcut));
            assert_ne!(app.nav.active(), Screen::Home);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.nav.active(), Screen::Home);
        }
    }

    #[test]
    fn quit_from_home() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn menu_enter_selects_highlighted_option() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Down); // List movies
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.active(), Screen::List);
    }

    #[test]
    fn list_snapshot_refreshes_per_visit() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('l'));
        assert!(app.list.titles.is_empty());
        press(&mut app, KeyCode::Esc);

        app.apply(Action::Add("Dune".to_string()));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.list.titles.items, ["Dune"]);
    }

    #[test]
    fn help_popup_swallows_screen_keys() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help_popup);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.nav.active(), Screen::Home);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help_popup);
        assert_eq!(app.nav.active(), Screen::Home);
    }

    #[test]
    fn question_mark_is_text_on_add_screen() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help_popup);
        assert_eq!(app.add.input.value, "?");
    }

    #[test]
    fn navigation_clears_status() {
        let mut app = App::new(Catalog::new());
        app.apply(Action::Add("Dune".to_string()));
        assert!(app.status_message.is_some());
        app.apply(Action::Navigate(Screen::List));
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn dispatch_navigate_lands_on_home_from_every_screen() {
        for screen in [Screen::Add, Screen::List, Screen::Edit, Screen::Delete] {
            let mut app = App::new(Catalog::new());
            app.apply(Action::Navigate(screen));
            app.apply(Action::Navigate(Screen::Home));
            assert_eq!(app.nav.active(), Screen::Home);
        }
    }
}
