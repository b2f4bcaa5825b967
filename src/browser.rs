use anyhow::{Context, Result, bail};
use std::process::Command;
use tracing::info;

/// Platform command that hands a URL to the default browser
fn launcher(url: &str) -> Option<Command> {
    let mut command;

    if cfg!(target_os = "macos") {
        command = Command::new("open");
        command.arg(url);
    } else if cfg!(target_os = "windows") {
        command = Command::new("cmd");
        command.args(["/c", "start", "", url]);
    } else if cfg!(unix) {
        command = Command::new("xdg-open");
        command.arg(url);
    } else {
        return None;
    }

    Some(command)
}

/// Open URL in the default browser
pub fn open(url: &str) -> Result<()> {
    let Some(mut command) = launcher(url) else {
        bail!("Opening a browser is not supported on this operating system");
    };

    info!("Opening browser with {:?}", command.get_program());

    let status = command
        .status()
        .context("Failed to execute browser command")?;

    status
        .success()
        .then_some(())
        .context("Browser command returned error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_launcher_uses_xdg_open() {
        let command = launcher("https://signin.aws.amazon.com/federation").unwrap();
        assert_eq!(command.get_program(), "xdg-open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["https://signin.aws.amazon.com/federation"]);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_launcher_uses_open() {
        let command = launcher("https://example.com").unwrap();
        assert_eq!(command.get_program(), "open");
    }

    #[test]
    #[cfg(target_os = "windows")]
    fn test_launcher_uses_start() {
        let command = launcher("https://example.com").unwrap();
        assert_eq!(command.get_program(), "cmd");
        assert_eq!(command.get_args().count(), 4);
    }
}
