//! Topic form: a single-line editor plus level/format presets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::generate::GenerateRequest;
use crate::ui::layout::AppLayout;

/// Level presets cycled with Ctrl+L; the first is the endpoint default.
pub const LEVELS: &[&str] = &["Lycée", "Collège", "Primaire", "Supérieur"];

/// Format presets cycled with Ctrl+F; the first is the endpoint default.
pub const FORMATS: &[&str] = &["Fiche + Quiz", "Fiche seule", "Quiz seul"];

pub struct FormPane {
    input: String,
    /// Byte offset of the cursor within `input`, always on a char boundary.
    cursor: usize,
    level_idx: usize,
    format_idx: usize,
}

impl FormPane {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            level_idx: 0,
            format_idx: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.move_left();
            self.input.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn cycle_level(&mut self) {
        self.level_idx = (self.level_idx + 1) % LEVELS.len();
    }

    pub fn cycle_format(&mut self) {
        self.format_idx = (self.format_idx + 1) % FORMATS.len();
    }

    pub fn level(&self) -> &'static str {
        LEVELS[self.level_idx]
    }

    pub fn format(&self) -> &'static str {
        FORMATS[self.format_idx]
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor column in characters, for hardware cursor placement.
    pub fn cursor_col(&self) -> u16 {
        self.input[..self.cursor].chars().count() as u16
    }

    /// Build the request for the current form state. `None` when the topic
    /// is blank. The input stays in place so the topic can be resubmitted.
    pub fn submit(&self) -> Option<GenerateRequest> {
        let topic = self.input.trim();
        if topic.is_empty() {
            return None;
        }
        Some(GenerateRequest {
            topic: topic.to_string(),
            level: Some(self.level().to_string()),
            format: Some(self.format().to_string()),
            details: None,
        })
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
            .title(" Saisie ".bold());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let input_area = Rect { height: 1, ..inner };
        Paragraph::new(self.input.as_str()).render(input_area, buf);

        if inner.height > 1 {
            let hint_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            let hint = format!(
                "Niveau: {} · Format: {}  (Ctrl+L / Ctrl+F)",
                self.level(),
                self.format()
            );
            Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .render(hint_area, buf);
        }
    }

    /// Hardware cursor position when this pane has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = AppLayout::inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let x = inner.x + self.cursor_col().min(inner.width.saturating_sub(1));
        Some((x, inner.y))
    }
}

impl Default for FormPane {
    fn default() -> Self {
        Self::new()
    }
}
