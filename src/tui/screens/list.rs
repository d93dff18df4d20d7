//! List screen: read-only view of the catalog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::{events::Action, nav::Screen, ui::{SelectableList, Styles}};

/// List screen state: a snapshot of the catalog taken when the screen is
/// entered, plus a highlight cursor.
pub struct ListScreen {
    pub titles: SelectableList<String>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            titles: SelectableList::new(Vec::new()),
        }
    }

    /// Refresh the snapshot shown by this screen.
    pub fn set_titles(&mut self, titles: Vec<String>) {
        self.titles.set_items(titles);
    }

    /// Drop the snapshot and cursor when the screen is left.
    pub fn reset(&mut self) {
        self.titles.set_items(Vec::new());
    }

    /// Handle key events for the list screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Screen::Home),
            KeyCode::Up => {
                self.titles.previous();
                Action::None
            }
            KeyCode::Down => {
                self.titles.next();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Draw the list screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // List
                Constraint::Length(3), // Instructions
            ])
            .split(area);

        let count = self.titles.len();
        let title = Paragraph::new(format!("Movie list ({count})"))
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        if self.titles.is_empty() {
            let empty = Paragraph::new("The catalog is empty.")
                .style(Styles::inactive())
                .block(
                    Block::default()
                        .title("Movies")
                        .borders(Borders::ALL)
                        .border_style(Styles::inactive_border()),
                );
            f.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .titles
                .items
                .iter()
                .enumerate()
                .map(|(i, title)| {
                    let style = if Some(i) == self.titles.selected_index() {
                        Styles::selected()
                    } else {
                        Style::default()
                    };
                    let content = format!("{}. {}", i + 1, title);
                    ListItem::new(Line::from(Span::styled(content, style)))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .title("Movies")
                        .borders(Borders::ALL)
                        .border_style(Styles::active_border()),
                )
                .highlight_style(Styles::selected());

            f.render_stateful_widget(list, chunks[1], &mut self.titles.state);
        }

        let instructions = Paragraph::new("↑/↓: move | Esc: back")
            .style(Styles::info())
            .block(
                Block::default()
                    .title("Instructions")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
        f.render_widget(instructions, chunks[2]);
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}
