//! RéviseTerm - a terminal study-aid for generated revision sheets
//!
//! This library provides the core functionality for RéviseTerm:
//! - A bounded, deduplicated history of generated sheets with durable
//!   client-side storage
//! - Rendering of that history onto injected display targets
//! - Clipboard copy with a legacy-command fallback
//! - Printable HTML export opened in the system browser
//! - The generation endpoint (axum) and its client
//!
//! Platform operations (clipboard, browsing context, storage) are
//! capability parameters, so every core function runs in tests with plain
//! fakes. The TUI in [`app`]/[`ui`] and the server in `revise-api` are the
//! two hosts wiring real capabilities in.
//!
//! # Example
//!
//! ```
//! use revise_term::history::{HistoryStore, MemoryStorage};
//! use revise_term::render::{render_history, HistoryItem, ListTarget};
//!
//! let mut store = HistoryStore::new(MemoryStorage::new());
//! store.save_to_history("Les fractions", "1/2 + 1/4 = 3/4");
//!
//! struct Items(Vec<HistoryItem>);
//! impl ListTarget for Items {
//!     fn replace_items(&mut self, items: Vec<HistoryItem>) {
//!         self.0 = items;
//!     }
//! }
//!
//! let mut list = Items(Vec::new());
//! render_history(&store, Some(&mut list));
//! assert_eq!(list.0[0].label(), "Les fractions");
//! ```

pub mod api;
pub mod app;
pub mod event;
pub mod export;
pub mod generate;
pub mod history;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{ActivePane, App};
pub use export::{copy_text, escape_html, open_pdf};
pub use generate::{GenerateRequest, GenerationManager};
pub use history::{HistoryEntry, HistoryStore};
pub use render::render_history;
