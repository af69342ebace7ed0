//! Plaintext capture via the user's editor.
//!
//! The usual commit-message flow: open a scratch file in `$EDITOR` (fallback
//! `vim`), let the user type and save, read the result back. The scratch
//! file is removed when its handle drops, so the plaintext does not outlive
//! the capture.

use std::{env, fs, io, process::Command};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Editor used when `$EDITOR` is unset.
pub const DEFAULT_EDITOR: &str = "vim";

/// Errors from capturing plaintext in an editor.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Scratch file handling or editor spawn failed.
    #[error("editor i/o failure: {0}")]
    Io(#[from] io::Error),

    /// The editor exited unsuccessfully; the capture is discarded.
    #[error("editor exited with {status}")]
    Editor {
        /// Exit status reported by the editor process
        status: std::process::ExitStatus,
    },

    /// Nothing was written to the scratch file.
    #[error("no message was entered")]
    Empty,
}

/// The editor the user prefers: `$EDITOR`, or [`DEFAULT_EDITOR`].
pub fn preferred_editor() -> String {
    env::var("EDITOR").unwrap_or_else(|_| DEFAULT_EDITOR.to_string())
}

/// Open `editor` on a scratch file and return what the user saved.
///
/// `editor` may carry arguments (`code --wait`); the scratch file path is
/// appended as the final argument.
///
/// # Errors
///
/// [`EditorError`] when the editor cannot be spawned, exits non-zero, or
/// the user saved nothing.
pub fn capture_input(editor: &str) -> Result<Vec<u8>, EditorError> {
    let mut words = editor.split_whitespace();
    let Some(program) = words.next() else {
        return Err(EditorError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty editor command",
        )));
    };

    let scratch = NamedTempFile::new()?;

    let status = Command::new(program).args(words).arg(scratch.path()).status()?;
    if !status.success() {
        return Err(EditorError::Editor { status });
    }

    let contents = fs::read(scratch.path())?;
    if contents.is_empty() {
        return Err(EditorError::Empty);
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn captures_what_the_editor_writes() {
        use std::os::unix::fs::PermissionsExt;

        // A scripted "editor" that writes a fixed message to the file it is
        // handed, the same way a real editor would on save.
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-editor");
        fs::write(&script, "#!/bin/sh\nprintf 'from the editor' > \"$1\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let captured = capture_input(script.to_str().unwrap()).unwrap();
        assert_eq!(captured, b"from the editor");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        let result = capture_input("false");
        assert!(matches!(result, Err(EditorError::Editor { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn empty_capture_is_an_error() {
        // `true` exits cleanly without writing anything.
        let result = capture_input("true");
        assert!(matches!(result, Err(EditorError::Empty)));
    }

    #[test]
    fn blank_editor_command_is_an_error() {
        assert!(matches!(capture_input("   "), Err(EditorError::Io(_))));
    }

    #[test]
    fn preferred_editor_has_a_fallback() {
        assert!(!preferred_editor().is_empty());
    }
}
