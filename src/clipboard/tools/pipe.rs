//! Shared helpers for tools that read the clipboard text from stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::clipboard::tool::CopyToolError;

/// Check if `program` is on the PATH.
pub(super) fn tool_exists(program: &str) -> bool {
    let finder = if cfg!(target_os = "windows") { "where" } else { "which" };
    Command::new(finder)
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Spawn `program` with `args` and write `text` to its stdin.
pub(super) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    // Dropping stdin closes the pipe so the tool sees EOF.
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(CopyToolError::Failed(e.to_string()));
        }
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", program, status)))
    }
}
