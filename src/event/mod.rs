//! Event sources and per-pane input handling for the TUI.
//!
//! User input is read on a dedicated thread and fed through a channel so
//! the main loop can `select!` over it next to the generation results.
//! Pane-specific key handling lives in one submodule per pane; handlers
//! mutate their widget and report the resulting action for the app layer
//! to wire up.

pub mod form;
pub mod history;
pub mod mouse;
pub mod output;

use std::io::Result;
use std::thread;

use tokio::sync::mpsc::{self, Receiver};

/// User input events from the terminal (keyboard, mouse, resize).
pub type UserEvent = crossterm::event::Event;

/// Spawn the blocking crossterm reader on its own thread.
///
/// The thread ends on its own once the receiver is dropped and the next
/// send fails.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}
