//! Content pane: the generated sheet, scrollable.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::render::TextSink;

pub struct OutputPanel {
    content: String,
    scroll: u16,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            scroll: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_top(&mut self) {
        self.scroll = 0;
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
            .title(" Contenu ".bold());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.content.is_empty() {
            Paragraph::new("Entre un thème puis appuie sur Entrée.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }
        Paragraph::new(self.content.as_str())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for OutputPanel {
    /// Replacing the content jumps back to the top of the sheet.
    fn set_text(&mut self, text: &str) {
        self.content = text.to_string();
        self.scroll = 0;
    }
}
