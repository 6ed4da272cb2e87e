// src/emit/format.rs
// Optional external formatter pass (e.g. gofmt)

use crate::error::{Result, StdpkgsError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Pipe `source` through `command` and return its stdout.
///
/// `command` is split with POSIX shell quoting rules into a program and
/// arguments; no shell is involved. The formatter must read the source
/// from stdin, exit successfully and print valid UTF-8. Anything else is an
/// error.
pub fn run_formatter(command: &str, source: &str) -> Result<String> {
    let parts = shell_words::split(command)
        .map_err(|e| StdpkgsError::Format(format!("cannot parse `{command}`: {e}")))?;
    let Some((program, args)) = parts.split_first() else {
        return Err(StdpkgsError::Format("empty format command".to_string()));
    };

    debug!(program, ?args, "Running formatter");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| StdpkgsError::Format(format!("failed to start `{command}`: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| StdpkgsError::Format(format!("`{command}` has no stdin")))?;

    // Feed stdin from a second thread so a full stdout pipe cannot deadlock us
    let output = std::thread::scope(|scope| {
        let writer = scope.spawn(move || stdin.write_all(source.as_bytes()));
        let output = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
        (output, written)
    });

    let output = match output {
        (Ok(output), _) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StdpkgsError::Format(format!(
                "`{command}` exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        (Ok(output), Ok(())) => output,
        (Ok(_), Err(e)) => {
            return Err(StdpkgsError::Format(format!(
                "failed to write source to `{command}`: {e}"
            )));
        }
        (Err(e), _) => {
            return Err(StdpkgsError::Format(format!("failed to wait for `{command}`: {e}")));
        }
    };

    String::from_utf8(output.stdout)
        .map_err(|_| StdpkgsError::Format(format!("`{command}` produced non-UTF-8 output")))
}
