//! History pane: the clickable list of saved sheets.
//!
//! This panel is the production [`ListTarget`]: `render_history` replaces
//! its items after every save, and activation flows back through the app.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::render::{HistoryItem, ListTarget};

pub struct HistoryPanel {
    items: Vec<HistoryItem>,
    selected: usize,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// The selected item, cloned for activation outside the borrow.
    pub fn selected_item(&self) -> Option<HistoryItem> {
        self.items.get(self.selected).cloned()
    }

    /// Map a screen row inside `inner` to an item index.
    pub fn row_to_index(&self, inner: Rect, row: u16) -> Option<usize> {
        if row < inner.y || row >= inner.y + inner.height {
            return None;
        }
        let index = (row - inner.y) as usize;
        (index < self.items.len()).then_some(index)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Historique ".bold());
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, item) in self.items.iter().enumerate().take(inner.height as usize) {
            let mut style = if item.is_interactive() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if focused && i == self.selected && item.is_interactive() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let row = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };
            Paragraph::new(item.label()).style(style).render(row, buf);
        }
    }
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListTarget for HistoryPanel {
    fn replace_items(&mut self, items: Vec<HistoryItem>) {
        self.items = items;
        // Keep the selection in range across re-renders
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }
}
