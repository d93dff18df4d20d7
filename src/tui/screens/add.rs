//! Add screen: append one title to the catalog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{events::Action, nav::Screen, ui::{InputField, Styles}};

/// Add screen state: a single text input, discarded when the screen is left.
pub struct AddScreen {
    pub input: InputField,
}

impl AddScreen {
    pub fn new() -> Self {
        let mut input = InputField::new("Movie title").with_placeholder("e.g. Dune");
        input.set_focus(true);
        Self { input }
    }

    /// Discard the transient input when the screen is left.
    pub fn reset(&mut self) {
        self.input.clear();
    }

    /// Handle key events for the add screen
    ///
    /// Enter always submits; the blank guard lives at the catalog boundary,
    /// so a blank submit leaves every piece of state untouched and the
    /// screen stays active.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Screen::Home),
            KeyCode::Enter => Action::Add(self.input.value.clone()),
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.input.delete_char();
                Action::None
            }
            KeyCode::Delete => {
                self.input.delete_char_forward();
                Action::None
            }
            KeyCode::Left => {
                self.input.move_cursor_left();
                Action::None
            }
            KeyCode::Right => {
                self.input.move_cursor_right();
                Action::None
            }
            KeyCode::Home => {
                self.input.move_cursor_to_start();
                Action::None
            }
            KeyCode::End => {
                self.input.move_cursor_to_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Draw the add screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input
                Constraint::Min(0),    // Spacer
                Constraint::Length(3), // Instructions
            ])
            .split(area);

        let title = Paragraph::new("Add a movie")
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.input.render(f, chunks[1]);

        let instructions = Paragraph::new(vec![Line::from(
            "Enter: add and return home | Esc: back | blank input is ignored",
        )])
        .style(Styles::info())
        .block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(instructions, chunks[3]);
    }
}

impl Default for AddScreen {
    fn default() -> Self {
        Self::new()
    }
}
