//! Status line: the single-value status target at the bottom of the
//! screen. Shows key hints until something reports a status.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};

use crate::render::TextSink;

const KEY_HINTS: &str =
    "Tab: panneau · Entrée: générer / recharger · c: copier · p: export PDF · Ctrl+Q: quitter";

#[derive(Debug, Default)]
pub struct StatusLine {
    message: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.message.is_empty() {
            Paragraph::new(KEY_HINTS)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
        } else {
            Paragraph::new(self.message.as_str()).render(area, buf);
        }
    }
}

impl TextSink for StatusLine {
    fn set_text(&mut self, text: &str) {
        self.message = text.to_string();
    }
}
