//! Delete screen: pick a title and remove every matching entry

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::{events::Action, nav::Screen, ui::{SelectableList, Styles}};

/// Delete screen state: a snapshot of the catalog with a selection cursor,
/// discarded when the screen is left. The selection is local to this screen
/// and never part of catalog state.
pub struct DeleteScreen {
    pub titles: SelectableList<String>,
}

impl DeleteScreen {
    pub fn new() -> Self {
        Self {
            titles: SelectableList::new(Vec::new()),
        }
    }

    /// Refresh the snapshot shown by this screen.
    pub fn set_titles(&mut self, titles: Vec<String>) {
        self.titles.set_items(titles);
    }

    /// Drop the snapshot and selection when the screen is left.
    pub fn reset(&mut self) {
        self.titles.set_items(Vec::new());
    }

    /// Handle key events for the delete screen
    ///
    /// Enter with no selection (empty catalog) is a no-op.
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
            KeyCode::Enter => self
                .titles
                .selected()
                .map(|title| Action::Delete(title.clone()))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    /// Draw the delete screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // List
                Constraint::Length(4), // Instructions
            ])
            .split(area);

        let title = Paragraph::new("Delete a movie")
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        if self.titles.is_empty() {
            let empty = Paragraph::new("The catalog is empty - nothing to delete.")
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
                    ListItem::new(Line::from(Span::styled(title.clone(), style)))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .title("Select a title")
                        .borders(Borders::ALL)
                        .border_style(Styles::active_border()),
                )
                .highlight_style(Styles::selected());

            f.render_stateful_widget(list, chunks[1], &mut self.titles.state);
        }

        let instructions = Paragraph::new(vec![
            Line::from("↑/↓: move | Enter: delete and return home | Esc: back"),
            Line::from("Every entry equal to the selected title is removed."),
        ])
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

impl Default for DeleteScreen {
    fn default() -> Self {
        Self::new()
    }
}
