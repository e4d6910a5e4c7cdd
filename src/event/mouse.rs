//! Mouse event handling: click to focus a pane, click a history row to
//! reload that sheet.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::ActivePane;
use crate::render::HistoryItem;
use crate::ui::history::HistoryPanel;
use crate::ui::layout::AppLayout;

/// What the app layer should do after a mouse event.
#[derive(Debug, Clone)]
pub enum MouseAction {
    None,
    /// Focus the clicked pane.
    Focus(ActivePane),
    /// A history row was clicked: focus the pane and activate the item.
    ActivateHistory(HistoryItem),
}

/// Determine which pane is at the given screen position.
pub fn pane_at(layout: &AppLayout, col: u16, row: u16) -> Option<ActivePane> {
    let areas = [
        (layout.form_area, ActivePane::Form),
        (layout.output_area, ActivePane::Output),
        (layout.history_area, ActivePane::History),
    ];
    for (area, pane) in areas {
        if col >= area.x
            && col < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
        {
            return Some(pane);
        }
    }
    None
}

/// Handle a mouse event. Only left-button presses are meaningful.
pub fn handle_mouse_event(
    mouse: &MouseEvent,
    layout: &AppLayout,
    history: &mut HistoryPanel,
) -> MouseAction {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return MouseAction::None;
    }

    match pane_at(layout, mouse.column, mouse.row) {
        Some(ActivePane::History) => {
            let inner = AppLayout::inner(layout.history_area);
            if let Some(index) = history.row_to_index(inner, mouse.row) {
                history.select(index);
                if let Some(item) = history.selected_item() {
                    return MouseAction::ActivateHistory(item);
                }
            }
            MouseAction::Focus(ActivePane::History)
        }
        Some(pane) => MouseAction::Focus(pane),
        None => MouseAction::None,
    }
}
