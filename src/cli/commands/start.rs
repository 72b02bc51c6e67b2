use crate::cli::parser::Commands;
use crate::config::{self, Config};
use crate::core::reminder;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::notify;
use crate::store::session::SessionStore;
use crate::utils::{text, time};

const DEFAULT_DESCRIPTION: &str = "Work session";

/// Handle the `start` command: Idle -> Active.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { description } = cmd {
        let store = SessionStore::new(cfg);

        //
        // 1. Precondition: no active session
        //
        if store.exists() {
            println!("Time tracking is already running.");
            if let Ok(current) = store.read() {
                println!("Description: {}", current.description);
            }
            return Err(AppError::Precondition("start: already running".into()));
        }

        //
        // 2. Assemble and sanitize the description
        //
        let joined = description.join(" ");
        let desc = if joined.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            text::sanitize_description(&joined)
        };

        //
        // 3. Write the session record (atomic replace)
        //
        let now = time::now_local();
        let record = SessionRecord::new(config::username(), now, desc.clone());
        store.write(&record)?;

        //
        // 4. Spawn the reminder daemon (suppressed in test mode)
        //
        if !cfg.test {
            reminder::spawn_daemon(cfg)?;
        }

        //
        // 5. One-shot notification + stdout summary
        //
        let notifier = notify::for_config(cfg);
        if notifier
            .notify("Time Tracker Started", &format!("Started tracking: {}", desc))
            .is_err()
        {
            crate::ui::messages::notification(
                "Time Tracker Started",
                &format!("Started tracking: {}", desc),
            );
        }

        println!("Time tracking started at {}", now.format("%H:%M:%S"));
        println!("Description: {}", desc);
    }
    Ok(())
}
