//! Home screen: entry menu into the catalog operations

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::{events::Action, nav::Screen, ui::Styles};

/// A single home-menu entry
#[derive(Debug, Clone)]
pub struct MenuOption {
    pub title: String,
    pub description: String,
    pub shortcut: char,
    pub action: Action,
}

impl MenuOption {
    pub fn new(title: &str, description: &str, shortcut: char, action: Action) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            shortcut,
            action,
        }
    }
}

/// Home screen state
pub struct HomeScreen {
    pub menu_state: ListState,
    pub options: Vec<MenuOption>,
}

impl HomeScreen {
    pub fn new() -> Self {
        let options = vec![
            MenuOption::new(
                "Add a movie",
                "Type a title and append it to the catalog",
                'a',
                Action::Navigate(Screen::Add),
            ),
            MenuOption::new(
                "List movies",
                "Browse the catalog in insertion order",
                'l',
                Action::Navigate(Screen::List),
            ),
            MenuOption::new(
                "Edit a movie",
                "Rename every entry matching a title",
                'e',
                Action::Navigate(Screen::Edit),
            ),
            MenuOption::new(
                "Delete a movie",
                "Pick a title and remove every matching entry",
                'd',
                Action::Navigate(Screen::Delete),
            ),
            MenuOption::new("Quit", "Leave movietui", 'q', Action::Quit),
        ];

        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            menu_state,
            options,
        }
    }

    /// Restore the default selection when the screen is left.
    pub fn reset(&mut self) {
        self.menu_state.select(Some(0));
    }

    /// Handle key events for the home menu
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                let selected = self.menu_state.selected().unwrap_or(0);
                let new_selected = if selected == 0 {
                    self.options.len() - 1
                } else {
                    selected - 1
                };
                self.menu_state.select(Some(new_selected));
                Action::None
            }
            KeyCode::Down => {
                let selected = self.menu_state.selected().unwrap_or(0);
                self.menu_state
                    .select(Some((selected + 1) % self.options.len()));
                Action::None
            }
            KeyCode::Enter => self
                .menu_state
                .selected()
                .and_then(|i| self.options.get(i))
                .map(|option| option.action.clone())
                .unwrap_or(Action::None),
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                self.options
                    .iter()
                    .find(|option| option.shortcut == c)
                    .map(|option| option.action.clone())
                    .unwrap_or(Action::None)
            }
            _ => Action::None,
        }
    }

    /// Draw the home screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Menu
                Constraint::Length(4), // Instructions
            ])
            .split(area);

        self.draw_title(f, chunks[0]);
        self.draw_menu(f, chunks[1]);
        self.draw_instructions(f, chunks[2]);
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Movie Catalog")
            .style(Styles::title().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn draw_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if Some(i) == self.menu_state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };

                let content = vec![
                    Line::from(vec![
                        Span::styled(format!("[{}] ", option.shortcut), Styles::info()),
                        Span::styled(&option.title, style.add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", option.description),
                        if Some(i) == self.menu_state.selected() {
                            style
                        } else {
                            Styles::inactive()
                        },
                    )),
                ];

                ListItem::new(content)
            })
            .collect();

        let menu = List::new(items)
            .block(
                Block::default()
                    .title("Menu")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            )
            .highlight_style(Styles::selected());

        f.render_stateful_widget(menu, area, &mut self.menu_state);
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let instructions = vec![
            Line::from(vec![
                Span::styled("Navigation: ", Styles::info()),
                Span::raw("↑/↓ to move, "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to select"),
            ]),
            Line::from(vec![
                Span::styled("Shortcuts: ", Styles::info()),
                Span::styled("a/l/e/d", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" for direct access, "),
                Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to quit"),
            ]),
        ];

        let instructions_paragraph = Paragraph::new(instructions).block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );

        f.render_widget(instructions_paragraph, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
