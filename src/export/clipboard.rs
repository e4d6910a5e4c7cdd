//! Clipboard copy with a legacy-command fallback.
//!
//! Copying is a two-step strategy: try the injected clipboard capability,
//! and when it is absent or fails, hand the text to the platform's copy
//! utility over stdin. Every failure path collapses to `false`; callers
//! never handle errors.

use std::process::Stdio;

use anyhow::Context as _;
use arboard::Clipboard;
use futures::future::BoxFuture;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

/// Primary copy capability: an asynchronous clipboard write.
pub trait ClipboardCapability {
    fn write_text<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, anyhow::Result<()>>;
}

/// Fallback copy capability: the environment's legacy copy command.
pub trait CopyCommandCapability {
    fn copy<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, bool>;
}

/// Which strategy ended up copying the text, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed,
}

/// Run the copy strategy and report which step succeeded.
///
/// The primary capability is attempted when present; on absence or
/// failure the fallback runs; an absent fallback means [`CopyOutcome::Failed`].
pub async fn try_copy(
    text: &str,
    primary: Option<&mut dyn ClipboardCapability>,
    fallback: Option<&mut dyn CopyCommandCapability>,
) -> CopyOutcome {
    if let Some(primary) = primary {
        match primary.write_text(text).await {
            Ok(()) => return CopyOutcome::Primary,
            Err(e) => debug!("Clipboard write failed, falling back: {}", e),
        }
    }
    if let Some(fallback) = fallback {
        if fallback.copy(text).await {
            return CopyOutcome::Fallback;
        }
    }
    CopyOutcome::Failed
}

/// Copy `text` using the supplied capabilities. Resolves `true` when either
/// step succeeded; never errors.
pub async fn copy_text(
    text: &str,
    primary: Option<&mut dyn ClipboardCapability>,
    fallback: Option<&mut dyn CopyCommandCapability>,
) -> bool {
    !matches!(try_copy(text, primary, fallback).await, CopyOutcome::Failed)
}

/// System clipboard via arboard.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// `None` when no clipboard is reachable (e.g. headless session), which
    /// routes callers straight to the fallback.
    pub fn open() -> Option<Self> {
        match Clipboard::new() {
            Ok(clipboard) => Some(Self { clipboard }),
            Err(e) => {
                error!("Failed to access clipboard: {}", e);
                None
            }
        }
    }
}

impl ClipboardCapability for SystemClipboard {
    fn write_text<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, anyhow::Result<()>> {
        let result = self
            .clipboard
            .set_text(text.to_string())
            .context("Clipboard write failed");
        Box::pin(async move { result })
    }
}

/// Platform copy utilities tried in order, with the text fed on stdin.
const COPY_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
    &["clip"],
];

/// Legacy copy command spawned from the PATH.
#[derive(Debug, Default)]
pub struct OsCopyCommand;

impl OsCopyCommand {
    async fn run(argv: &[&str], text: &str) -> anyhow::Result<bool> {
        let mut child = tokio::process::Command::new(argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", argv[0]))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            drop(stdin);
        }
        let status = child.wait().await?;
        Ok(status.success())
    }
}

impl CopyCommandCapability for OsCopyCommand {
    fn copy<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            for argv in COPY_COMMANDS {
                match Self::run(argv, text).await {
                    Ok(true) => return true,
                    Ok(false) => debug!("{} exited unsuccessfully", argv[0]),
                    Err(e) => debug!("{}", e),
                }
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard {
        fail: bool,
        written: Option<String>,
    }

    impl FakeClipboard {
        fn working() -> Self {
            Self { fail: false, written: None }
        }

        fn broken() -> Self {
            Self { fail: true, written: None }
        }
    }

    impl ClipboardCapability for FakeClipboard {
        fn write_text<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, anyhow::Result<()>> {
            Box::pin(async move {
                if self.fail {
                    anyhow::bail!("denied");
                }
                self.written = Some(text.to_string());
                Ok(())
            })
        }
    }

    struct FakeCommand {
        ok: bool,
        copied: Option<String>,
    }

    impl CopyCommandCapability for FakeCommand {
        fn copy<'a>(&'a mut self, text: &'a str) -> BoxFuture<'a, bool> {
            Box::pin(async move {
                self.copied = Some(text.to_string());
                self.ok
            })
        }
    }

    #[tokio::test]
    async fn primary_capability_wins_when_present() {
        let mut clipboard = FakeClipboard::working();
        let mut command = FakeCommand { ok: true, copied: None };
        let ok = copy_text("abc", Some(&mut clipboard), Some(&mut command)).await;
        assert!(ok);
        assert_eq!(clipboard.written.as_deref(), Some("abc"));
        // The fallback was never consulted.
        assert!(command.copied.is_none());
    }

    #[tokio::test]
    async fn absent_primary_falls_back_to_command() {
        let mut command = FakeCommand { ok: true, copied: None };
        let ok = copy_text("xyz", None, Some(&mut command)).await;
        assert!(ok);
        assert_eq!(command.copied.as_deref(), Some("xyz"));
    }

    #[tokio::test]
    async fn failed_primary_falls_back_to_command() {
        let mut clipboard = FakeClipboard::broken();
        let mut command = FakeCommand { ok: true, copied: None };
        let outcome = try_copy("t", Some(&mut clipboard), Some(&mut command)).await;
        assert_eq!(outcome, CopyOutcome::Fallback);
    }

    #[tokio::test]
    async fn resolves_false_when_both_paths_fail() {
        let mut clipboard = FakeClipboard::broken();
        let mut command = FakeCommand { ok: false, copied: None };
        let ok = copy_text("t", Some(&mut clipboard), Some(&mut command)).await;
        assert!(!ok);
    }

    #[tokio::test]
    async fn resolves_false_without_any_capability() {
        assert!(!copy_text("t", None, None).await);
        assert_eq!(try_copy("t", None, None).await, CopyOutcome::Failed);
    }
}
