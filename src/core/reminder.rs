//! Reminder loop and daemon lifecycle.
//!
//! While a session is active, a detached copy of this executable polls the
//! session record and periodically delivers a reminder naming the current
//! task. The record's existence is the loop's termination flag; `stop`
//! additionally signals the daemon so it dies immediately instead of within
//! one probe interval.

use std::env;
use std::fs;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::session::SessionStore;
use crate::ui::messages;
use crate::utils::time;

/// How often the loop wakes to check the session record.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);
/// Minimum gap between reminders.
pub const NOTIFICATION_INTERVAL: Duration = Duration::from_secs(180);

/// Core polling loop, parameterized over its intervals so tests can shrink
/// them. Uses a monotonic clock for the cadence so wall-clock adjustments
/// cannot cause reminder storms.
pub fn run_loop(
    store: &SessionStore,
    notifier: &dyn Notifier,
    probe: Duration,
    notify_every: Duration,
) {
    let mut last = Instant::now();

    while store.exists() {
        thread::sleep(probe);

        if last.elapsed() < notify_every {
            continue;
        }

        // Re-read on every tick: a description edited mid-session is
        // honored on the next reminder.
        let record = match store.read() {
            Ok(r) => r,
            // Record present but unreadable: skip this reminder, keep
            // polling. Removal is the only termination condition.
            Err(_) => continue,
        };

        let message = match record.start() {
            Ok(start) => {
                let hours = time::duration_hours(start, time::now_local());
                format!(
                    "You've been working for {:.1} hours. Current task: {}",
                    hours, record.description
                )
            }
            Err(_) => format!("Current task: {}", record.description),
        };

        if notifier.notify("Time Tracker Reminder", &message).is_err() {
            messages::notification("Time Tracker Reminder", &message);
        }
        last = Instant::now();
    }
}

/// Entry point of the hidden `daemon` verb: run the loop with production
/// intervals, then drop the PID file on the way out.
pub fn run_daemon(cfg: &Config, notifier: &dyn Notifier) -> AppResult<()> {
    let store = SessionStore::new(cfg);
    run_loop(&store, notifier, PROBE_INTERVAL, NOTIFICATION_INTERVAL);
    let _ = fs::remove_file(cfg.pid_file());
    Ok(())
}

/// Spawn the reminder daemon: re-invoke the current executable with the
/// hidden `daemon` verb, detached from the terminal, and record its PID.
pub fn spawn_daemon(cfg: &Config) -> AppResult<()> {
    let exe = env::current_exe()?;
    let child = Command::new(exe)
        .arg("--dir")
        .arg(&cfg.root)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    fs::write(cfg.pid_file(), child.id().to_string())?;
    Ok(())
}

/// Terminate the daemon if one is recorded: read the PID file, send
/// SIGTERM, delete the file. Never signals the current process, so a stale
/// file reused by our own PID cannot kill us.
pub fn kill_daemon(cfg: &Config) {
    let pid_path = cfg.pid_file();
    if let Ok(data) = fs::read_to_string(&pid_path) {
        if let Ok(pid) = data.trim().parse::<u32>() {
            if pid != std::process::id() && is_pid_running(pid) {
                signal_pid(pid);
            }
        }
    }
    let _ = fs::remove_file(&pid_path);
}

/// True if a process with the given PID exists (unix: `kill(pid, 0)`).
fn is_pid_running(pid: u32) -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::kill(pid as i32, 0) == 0 }
    }
    #[cfg(not(unix))]
    {
        let _ = pid;
        false
    }
}

/// Send SIGTERM. No-op off unix: there the loop still exits within one
/// probe interval of the record's removal.
fn signal_pid(pid: u32) {
    #[cfg(unix)]
    {
        unsafe {
            libc::kill(pid as i32, libc::SIGTERM);
        }
    }
    #[cfg(not(unix))]
    {
        let _ = pid;
    }
}
