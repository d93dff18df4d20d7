//! Edit screen: rename every catalog entry matching a title

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{events::Action, nav::Screen, ui::{InputField, Styles}};

const FIELD_COUNT: usize = 2;

/// Edit screen state: two text inputs and a focus index, all discarded when
/// the screen is left.
pub struct EditScreen {
    pub current_input: InputField,
    pub new_input: InputField,
    focus: usize,
}

impl EditScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            current_input: InputField::new("Current title")
                .with_placeholder("Title to rename"),
            new_input: InputField::new("New title").with_placeholder("Replacement title"),
            focus: 0,
        };
        screen.update_focus();
        screen
    }

    /// Discard the transient inputs when the screen is left.
    pub fn reset(&mut self) {
        self.current_input.clear();
        self.new_input.clear();
        self.focus = 0;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.current_input.set_focus(self.focus == 0);
        self.new_input.set_focus(self.focus == 1);
    }

    fn focused_input(&mut self) -> &mut InputField {
        if self.focus == 0 {
            &mut self.current_input
        } else {
            &mut self.new_input
        }
    }

    /// Handle key events for the edit screen
    ///
    /// Enter always submits; the blank guard lives at the catalog boundary,
    /// so a submit with either field blank changes nothing and the screen
    /// stays active.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Screen::Home),
            KeyCode::Enter => Action::Edit {
                old: self.current_input.value.clone(),
                new: self.new_input.value.clone(),
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                self.update_focus();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                self.update_focus();
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_input().insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_input().delete_char();
                Action::None
            }
            KeyCode::Delete => {
                self.focused_input().delete_char_forward();
                Action::None
            }
            KeyCode::Left => {
                self.focused_input().move_cursor_left();
                Action::None
            }
            KeyCode::Right => {
                self.focused_input().move_cursor_right();
                Action::None
            }
            KeyCode::Home => {
                self.focused_input().move_cursor_to_start();
                Action::None
            }
            KeyCode::End => {
                self.focused_input().move_cursor_to_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Draw the edit screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Current title input
                Constraint::Length(3), // New title input
                Constraint::Min(0),    // Spacer
                Constraint::Length(4), // Instructions
            ])
            .split(area);

        let title = Paragraph::new("Edit a movie")
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.current_input.render(f, chunks[1]);
        self.new_input.render(f, chunks[2]);

        let instructions = Paragraph::new(vec![
            Line::from("Tab/↑/↓: switch field | Enter: rename and return home | Esc: back"),
            Line::from("Every entry equal to the current title is renamed."),
        ])
        .style(Styles::info())
        .block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(instructions, chunks[4]);
    }
}

impl Default for EditScreen {
    fn default() -> Self {
        Self::new()
    }
}
