use crate::config::Config;
use crate::core::reminder;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::notify;
use crate::store::log::LogStore;
use crate::store::session::SessionStore;
use crate::ui::messages;
use crate::utils::time;

/// Handle the `stop` command: Active -> Idle.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg);

    //
    // 1. Precondition: a session is active
    //
    if !store.exists() {
        println!("Time tracking is not running.");
        return Err(AppError::Precondition("stop: not running".into()));
    }

    //
    // 2. Read the record. A malformed record is never deleted: the user
    //    repairs or removes the file by hand.
    //
    let record = store.read().map_err(|e| match e {
        AppError::Session(msg) => {
            AppError::Session(format!("{}; fix or remove the file manually", msg))
        }
        other => other,
    })?;

    //
    // 3. Compute the duration. A clock that went backwards is reported and
    //    clamped to zero, but the row is still appended.
    //
    let start = record.start().map_err(|_| {
        AppError::Session(format!(
            "invalid start_time {:?} in {}; fix or remove the file manually",
            record.start_time,
            store.path().display()
        ))
    })?;
    let end = time::now_local();
    if end < start {
        messages::warning(format!(
            "System clock went backwards (start {}, end {}); recording 0.00 hours",
            record.start_time,
            time::format_iso(end)
        ));
    }
    let hours = time::duration_hours(start, end);

    //
    // 4. Append to the log, then drop the record and the daemon
    //
    let log = LogStore::new(cfg);
    log.append(&LogEntry {
        name: record.name.clone(),
        date: end.format("%Y-%m-%d").to_string(),
        start_time: start.format("%H:%M:%S").to_string(),
        end_time: end.format("%H:%M:%S").to_string(),
        duration_hours: hours,
        description: record.description.clone(),
    })?;

    store.remove()?;
    reminder::kill_daemon(cfg);

    //
    // 5. Notification + stdout summary
    //
    let notifier = notify::for_config(cfg);
    if notifier
        .notify(
            "Time Tracker Stopped",
            &format!("Worked for {:.2} hours. Logged to CSV file", hours),
        )
        .is_err()
    {
        messages::notification(
            "Time Tracker Stopped",
            &format!("Worked for {:.2} hours. Logged to CSV file", hours),
        );
    }

    println!("Time tracking stopped at {}", end.format("%H:%M:%S"));
    println!("Duration: {} hours", time::format_hours(hours));
    println!("Logged to: {}", log.path().display());
    Ok(())
}
