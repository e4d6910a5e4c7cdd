//! Key event handling for the history pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::render::HistoryItem;
use crate::ui::history::HistoryPanel;

/// Handle a key press in the history pane.
///
/// Up/Down move the selection; Enter returns the item to activate.
pub fn handle_key_event(history: &mut HistoryPanel, key_evt: KeyEvent) -> Option<HistoryItem> {
    match key_evt.code {
        KeyCode::Up => {
            history.select_prev();
            None
        }
        KeyCode::Down => {
            history.select_next();
            None
        }
        KeyCode::Enter => history.selected_item(),
        _ => None,
    }
}
