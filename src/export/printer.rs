//! Printable export: a fixed HTML document written into a new browsing
//! context, which triggers the platform print dialog on load.
//!
//! The browsing context is a capability pair ([`WindowOpener`] yielding a
//! [`DocumentSink`]), so tests observe the written document while the TUI
//! opens the real system browser on a temp file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Local;
use tracing::{error, info};

use crate::export::escape::escape_html;
use crate::render::TextSink;

/// Receives the exported document. `close` finishes the stream; it is
/// best-effort and infallible, mirroring a browsing context's close.
pub trait DocumentSink {
    fn write(&mut self, html: &str) -> anyhow::Result<()>;
    fn close(&mut self) {}
}

/// Opens a new blank browsing context. `None` means the popup was blocked.
pub trait WindowOpener {
    fn open_blank(&mut self) -> Option<Box<dyn DocumentSink>>;
}

/// Build the printable document around the escaped content.
pub fn print_document(content: &str) -> String {
    format!(
        r#"<html><head><meta charset="utf-8" />
<title>RéviseTerm - Export PDF</title>
<style>
  body{{font-family:system-ui,Segoe UI,Roboto,Arial;padding:24px;line-height:1.5;}}
  pre{{white-space:pre-wrap;font-family:inherit;}}
  h1{{margin:0 0 12px;}}
  .muted{{color:#666;font-size:12px;margin-bottom:18px;}}
</style></head>
<body>
  <h1>RéviseTerm</h1>
  <div class="muted">Dans la fenêtre d’impression, choisis “Enregistrer en PDF”.</div>
  <pre>{}</pre>
  <script>window.onload = () => window.print();</script>
</body></html>
"#,
        escape_html(content)
    )
}

/// Export `content` into a new browsing context and trigger printing.
///
/// Returns `false` with a "Popup bloquée" status when the opener yields no
/// handle, or when the document write fails. Never errors.
pub fn open_pdf(
    content: &str,
    opener: &mut dyn WindowOpener,
    status: Option<&mut dyn TextSink>,
) -> bool {
    let Some(mut sink) = opener.open_blank() else {
        if let Some(status) = status {
            status.set_text("Popup bloquée");
        }
        return false;
    };
    match sink.write(&print_document(content)) {
        Ok(()) => {
            sink.close();
            true
        }
        Err(e) => {
            error!("Failed to write export document: {}", e);
            false
        }
    }
}

/// Production opener: the document goes to a temp `.html` file and the
/// platform browser is launched on close.
#[derive(Debug)]
pub struct BrowserWindow {
    dir: PathBuf,
}

impl BrowserWindow {
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for BrowserWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowOpener for BrowserWindow {
    fn open_blank(&mut self) -> Option<Box<dyn DocumentSink>> {
        // One file per export, like the per-run log files
        let name = format!(
            "reviseterm-export.{}.html",
            Local::now().format("%Y-%m-%d-%H-%M-%S")
        );
        Some(Box::new(BrowserDocument {
            path: self.dir.join(name),
            written: false,
        }))
    }
}

struct BrowserDocument {
    path: PathBuf,
    written: bool,
}

impl DocumentSink for BrowserDocument {
    fn write(&mut self, html: &str) -> anyhow::Result<()> {
        fs::write(&self.path, html)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.written = true;
        Ok(())
    }

    fn close(&mut self) {
        if !self.written {
            return;
        }
        match browser_command(&self.path).spawn() {
            Ok(_) => info!("Export opened in browser: {}", self.path.display()),
            Err(e) => error!("Failed to open browser for export: {}", e),
        }
    }
}

#[cfg(target_os = "macos")]
fn browser_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn browser_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn browser_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct StatusLine {
        text: String,
    }

    impl TextSink for StatusLine {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
    }

    struct BlockedWindow;

    impl WindowOpener for BlockedWindow {
        fn open_blank(&mut self) -> Option<Box<dyn DocumentSink>> {
            None
        }
    }

    #[derive(Clone, Default)]
    struct Recorded {
        html: Rc<RefCell<Option<String>>>,
        closed: Rc<RefCell<bool>>,
    }

    struct FakeWindow {
        recorded: Recorded,
    }

    struct FakeDocument {
        recorded: Recorded,
    }

    impl WindowOpener for FakeWindow {
        fn open_blank(&mut self) -> Option<Box<dyn DocumentSink>> {
            Some(Box::new(FakeDocument {
                recorded: self.recorded.clone(),
            }))
        }
    }

    impl DocumentSink for FakeDocument {
        fn write(&mut self, html: &str) -> anyhow::Result<()> {
            *self.recorded.html.borrow_mut() = Some(html.to_string());
            Ok(())
        }

        fn close(&mut self) {
            *self.recorded.closed.borrow_mut() = true;
        }
    }

    #[test]
    fn blocked_popup_returns_false_and_sets_status() {
        let mut status = StatusLine::default();
        let ok = open_pdf("quelque chose", &mut BlockedWindow, Some(&mut status));
        assert!(!ok);
        assert_eq!(status.text, "Popup bloquée");
    }

    #[test]
    fn blocked_popup_without_status_target() {
        assert!(!open_pdf("x", &mut BlockedWindow, None));
    }

    #[test]
    fn writes_escaped_document_and_closes() {
        let recorded = Recorded::default();
        let mut window = FakeWindow {
            recorded: recorded.clone(),
        };
        let ok = open_pdf("<tag>", &mut window, None);
        assert!(ok);
        assert!(*recorded.closed.borrow());

        let html = recorded.html.borrow().clone().unwrap();
        assert!(html.contains("&lt;tag&gt;"));
        assert!(!html.contains("<tag>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("RéviseTerm - Export PDF"));
    }

    #[test]
    fn browser_window_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = BrowserWindow::in_dir(dir.path());
        let mut sink = window.open_blank().unwrap();
        sink.write(&print_document("contenu")).unwrap();
        // Intentionally not closed: closing would launch a browser.

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
