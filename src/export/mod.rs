//! Getting a generated sheet out of the app: clipboard copy and printable
//! HTML export.

pub mod clipboard;
pub mod escape;
pub mod printer;

pub use clipboard::{copy_text, try_copy, CopyOutcome, OsCopyCommand, SystemClipboard};
pub use escape::escape_html;
pub use printer::{open_pdf, print_document, BrowserWindow};
