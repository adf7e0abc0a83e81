use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;
use tracing::{info, warn};

/// Opens `path` in the platform viewer without waiting for it.
/// Headless sessions and launch failures are logged, never fatal.
pub fn show_figure(path: &Path) -> Result<()> {
    launch_viewer(path, display_available())?;
    Ok(())
}

/// Returns whether a viewer process was started.
pub fn launch_viewer(path: &Path, has_display: bool) -> Result<bool> {
    if !has_display {
        info!(path = %path.display(), "no display available, skipping viewer");
        return Ok(false);
    }

    let mut cmd = viewer_command(path);
    match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => {
            info!(path = %path.display(), "viewer launched");
            Ok(true)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "viewer launch failed");
            Ok(false)
        }
    }
}

pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
