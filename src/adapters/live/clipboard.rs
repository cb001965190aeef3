//! Live clipboard adapter that pipes text into a platform clipboard tool.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::clipboard::{Clipboard, ClipboardFuture};
use crate::ports::PortError;

/// A program plus arguments that reads clipboard text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tool {
    program: String,
    args: Vec<String>,
}

impl Tool {
    fn new(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_string(), args: args.iter().map(|a| (*a).to_string()).collect() }
    }

    fn shell(command: &str) -> Self {
        if cfg!(windows) {
            Self::new("cmd", &["/C", command])
        } else {
            Self::new("sh", &["-c", command])
        }
    }
}

/// Live clipboard that hands text to `pbcopy`, `clip`, `wl-copy`, `xclip`
/// or `xsel`, whichever is present first, or to a user-supplied command.
pub struct LiveClipboard {
    tools: Vec<Tool>,
}

impl LiveClipboard {
    /// Uses `command` (run through the system shell) when given, otherwise
    /// the platform's usual clipboard tools.
    #[must_use]
    pub fn new(command: Option<&str>) -> Self {
        let tools = match command {
            Some(command) => vec![Tool::shell(command)],
            None => platform_tools(),
        };
        Self { tools }
    }
}

impl Default for LiveClipboard {
    fn default() -> Self {
        Self::new(None)
    }
}

fn platform_tools() -> Vec<Tool> {
    if cfg!(target_os = "macos") {
        vec![Tool::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![Tool::new("clip", &[])]
    } else {
        vec![
            Tool::new("wl-copy", &[]),
            Tool::new("xclip", &["-selection", "clipboard"]),
            Tool::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

async fn pipe_into(tool: &Tool, text: &str) -> Result<(), std::io::Error> {
    let mut child = Command::new(&tool.program)
        .args(&tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }
    let status = child.wait().await?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{} exited with {status}", tool.program)))
    }
}

impl Clipboard for LiveClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture<'_> {
        let text = text.to_string();
        Box::pin(async move {
            let mut last_error: Option<std::io::Error> = None;
            for tool in &self.tools {
                match pipe_into(tool, &text).await {
                    Ok(()) => {
                        tracing::debug!(program = %tool.program, "copied to clipboard");
                        return Ok(());
                    }
                    Err(err) => {
                        if err.kind() != ErrorKind::NotFound {
                            tracing::debug!(
                                program = %tool.program,
                                error = %err,
                                "clipboard tool failed"
                            );
                        }
                        last_error = Some(err);
                    }
                }
            }
            let err: PortError = match last_error {
                Some(err) if err.kind() != ErrorKind::NotFound => err.into(),
                _ => "no clipboard tool found (set PAYQR_CLIPBOARD_CMD)".into(),
            };
            Err(err)
        })
    }
}
