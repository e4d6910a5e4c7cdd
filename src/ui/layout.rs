//! Screen layout: form and content on the left, history sidebar on the
//! right, one status line at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub full_area: Rect,
    pub form_area: Rect,
    pub output_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn build(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(34)])
            .split(rows[0]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(columns[0]);

        Self {
            full_area: area,
            form_area: left[0],
            output_area: left[1],
            history_area: columns[1],
            status_area: rows[1],
        }
    }

    /// Area inside a panel's one-cell border, for cursor placement and
    /// mouse hit testing.
    pub fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }
}
