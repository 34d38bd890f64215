use crate::error::{FossleError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

struct Tool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[Tool] = &[Tool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const TOOLS: &[Tool] = &[Tool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[Tool] = &[
    Tool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    Tool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
    Tool {
        program: "wl-copy",
        args: &[],
    },
];

/// Copies text to the system clipboard by piping it to the platform's
/// clipboard tool (pbcopy, clip, xclip, xsel or wl-copy).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;
    for tool in TOOLS {
        match pipe_to(tool.program, tool.args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                log::debug!("clipboard via {} failed: {}", tool.program, e);
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        FossleError::Api("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| FossleError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| FossleError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| FossleError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(FossleError::Api(format!("{} exited with error", program)))
    }
}
