//! Key event handling for the topic form pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::generate::GenerateRequest;
use crate::ui::form::FormPane;

/// Handle a key press in the form pane.
///
/// Returns the request to submit when Enter is pressed on a non-empty
/// topic; everything else edits the form in place.
pub fn handle_key_event(form: &mut FormPane, key_evt: KeyEvent) -> Option<GenerateRequest> {
    // Ctrl+L / Ctrl+F cycle the level and format presets
    if key_evt.modifiers.contains(KeyModifiers::CONTROL) {
        match key_evt.code {
            KeyCode::Char('l') | KeyCode::Char('L') => {
                form.cycle_level();
                return None;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                form.cycle_format();
                return None;
            }
            _ => return None,
        }
    }

    match key_evt.code {
        KeyCode::Enter => form.submit(),
        KeyCode::Char(c) => {
            form.insert_char(c);
            None
        }
        KeyCode::Backspace => {
            form.delete_char();
            None
        }
        KeyCode::Left => {
            form.move_left();
            None
        }
        KeyCode::Right => {
            form.move_right();
            None
        }
        KeyCode::Home => {
            form.move_home();
            None
        }
        KeyCode::End => {
            form.move_end();
            None
        }
        _ => None,
    }
}
