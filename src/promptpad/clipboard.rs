use crate::error::{PromptError, Result};
use std::process::Command;

/// Somewhere plain text can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, driven through the platform's command-line tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Collects copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write, as when permission is denied.
    pub fn denied() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(PromptError::Clipboard("permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_to(xclip, "xclip", text) {
            Ok(()) => Ok(()),
            Err(first) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, "xsel", text).map_err(|e| {
                    PromptError::Clipboard(format!(
                        "{}; {}. Install xclip or xsel.",
                        first, e
                    ))
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(PromptError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(mut command: Command, name: &str, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PromptError::Clipboard(format!("Failed to spawn {}: {}", name, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PromptError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PromptError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PromptError::Clipboard(format!("{} exited with error", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_copy() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("two"));
    }

    #[test]
    fn denied_clipboard_errors() {
        let mut clipboard = MemoryClipboard::denied();
        assert!(matches!(
            clipboard.write_text("x"),
            Err(PromptError::Clipboard(_))
        ));
        assert!(clipboard.contents.is_none());
    }
}
