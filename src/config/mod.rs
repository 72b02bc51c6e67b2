use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

/// Resolved filesystem layout plus runtime flags shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding the session record, the log and the PID file.
    pub root: PathBuf,
    /// Test mode: console notifier only, no daemon spawn.
    pub test: bool,
}

impl Config {
    /// Return the standard config directory: `<home>/.time_tracker`.
    pub fn default_root() -> AppResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("could not determine home directory".into()))?;
        Ok(home.join(".time_tracker"))
    }

    /// Build a Config from an optional `--dir` override.
    pub fn resolve(dir: Option<&str>, test: bool) -> AppResult<Self> {
        let root = match dir {
            Some(d) => expand_tilde(d),
            None => Self::default_root()?,
        };
        Ok(Config { root, test })
    }

    /// Session record, absent iff no session is active.
    pub fn session_file(&self) -> PathBuf {
        self.root.join("current_session.json")
    }

    /// Append-only CSV log of completed sessions.
    pub fn log_file(&self) -> PathBuf {
        self.root.join("time_logs.csv")
    }

    /// PID of the reminder daemon, present only while it is alive.
    pub fn pid_file(&self) -> PathBuf {
        self.root.join("daemon.pid")
    }

    /// Create the config directory if missing. Idempotent; called once per
    /// invocation before dispatch.
    pub fn ensure_dirs(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

/// Acting OS account name: `USER`, then `USERNAME`, then the literal
/// `unknown`.
pub fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_paths_live_under_root() {
        let cfg = Config {
            root: PathBuf::from("/tmp/tt"),
            test: true,
        };
        assert_eq!(cfg.session_file(), PathBuf::from("/tmp/tt/current_session.json"));
        assert_eq!(cfg.log_file(), PathBuf::from("/tmp/tt/time_logs.csv"));
        assert_eq!(cfg.pid_file(), PathBuf::from("/tmp/tt/daemon.pid"));
    }

    #[test]
    fn resolve_honors_dir_override() {
        let cfg = Config::resolve(Some("/tmp/tt_override"), true).unwrap();
        assert_eq!(cfg.root, PathBuf::from("/tmp/tt_override"));
        assert!(cfg.test);
    }

    #[test]
    fn username_is_never_empty() {
        assert!(!username().is_empty());
    }
}
