//! Key event handling for the content pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::output::OutputPanel;

/// What the app layer should do after an output-pane key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputAction {
    None,
    /// Copy the current sheet to the clipboard.
    Copy(String),
    /// Export the current sheet as a printable document.
    Export(String),
}

/// Handle a key press in the content pane: scrolling, copy, export.
pub fn handle_key_event(output: &mut OutputPanel, key_evt: KeyEvent) -> OutputAction {
    match key_evt.code {
        KeyCode::Char('c') | KeyCode::Char('C') => OutputAction::Copy(output.content().to_string()),
        KeyCode::Char('p') | KeyCode::Char('P') => {
            OutputAction::Export(output.content().to_string())
        }
        KeyCode::Up => {
            output.scroll_up(1);
            OutputAction::None
        }
        KeyCode::Down => {
            output.scroll_down(1);
            OutputAction::None
        }
        KeyCode::PageUp => {
            output.scroll_up(10);
            OutputAction::None
        }
        KeyCode::PageDown => {
            output.scroll_down(10);
            OutputAction::None
        }
        KeyCode::Home => {
            output.scroll_top();
            OutputAction::None
        }
        _ => OutputAction::None,
    }
}
