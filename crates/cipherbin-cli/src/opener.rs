//! Launching the system browser on a link.

use std::{io, process::Command};

/// Platform command used to open a url.
#[cfg(target_os = "macos")]
const OPEN_COMMAND: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPEN_COMMAND: &str = "xdg-open";

/// Open `url` in the user's default browser.
///
/// # Errors
///
/// `io::Error` when the opener cannot be spawned or exits unsuccessfully.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let status = Command::new(OPEN_COMMAND).arg(url).status()?;
    if !status.success() {
        return Err(io::Error::other(format!("{OPEN_COMMAND} exited with {status}")));
    }

    Ok(())
}
