//! Desktop notification back-ends behind a small trait, so the delivery
//! mechanism can be swapped (or silenced in tests) without touching the
//! commands or the reminder loop.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub trait Notifier {
    /// Deliver `title` / `message`. Blocking, best effort.
    fn notify(&self, title: &str, message: &str) -> AppResult<()>;
}

/// Platform notifier: `notify-send` on unix, a PowerShell message box on
/// Windows. Falls back to the console line when the back-end is missing.
pub struct DesktopNotifier;

/// Prints `NOTIFICATION: <title> - <message>` to stdout. Used in test mode
/// and wherever desktop delivery is unavailable.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) -> AppResult<()> {
        messages::notification(title, message);
        Ok(())
    }
}

impl Notifier for DesktopNotifier {
    #[cfg(unix)]
    fn notify(&self, title: &str, message: &str) -> AppResult<()> {
        use std::process::Command;

        let status = Command::new("notify-send")
            .args(["-i", "time-admin", "-u", "normal", "-t", "5000"])
            .arg(title)
            .arg(message)
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => Err(AppError::Notify(format!("notify-send exited with {}", s))),
            Err(_) => {
                // notify-send not installed: console fallback still counts
                // as delivered
                messages::notification(title, message);
                Ok(())
            }
        }
    }

    #[cfg(windows)]
    fn notify(&self, title: &str, message: &str) -> AppResult<()> {
        use std::process::Command;

        let script = format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             [System.Windows.Forms.MessageBox]::Show('{}', '{}', 'OK', 'Information')",
            message.replace('\'', " "),
            title.replace('\'', " "),
        );
        let status = Command::new("powershell")
            .args(["-WindowStyle", "Hidden", "-Command", &script])
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            _ => {
                messages::notification(title, message);
                Ok(())
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    fn notify(&self, title: &str, message: &str) -> AppResult<()> {
        messages::notification(title, message);
        Ok(())
    }
}

/// Notifier selection: test mode pins the console back-end so output is
/// deterministic.
pub fn for_config(cfg: &Config) -> Box<dyn Notifier> {
    if cfg.test {
        Box::new(ConsoleNotifier)
    } else {
        Box::new(DesktopNotifier)
    }
}
