use crate::config::Config;
use crate::errors::AppResult;
use crate::store::session::SessionStore;
use crate::utils::time;

/// Handle the `status` command. Never transitions state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg);

    if !store.exists() {
        println!("Time tracking is not currently running.");
        return Ok(());
    }

    let record = store.read()?;

    println!("Time tracking is ACTIVE");
    println!("Started: {}", record.start_time);
    if let Ok(start) = record.start() {
        let hours = time::duration_hours(start, time::now_local());
        println!("Elapsed: {} hours", time::format_hours(hours));
    }
    println!("Description: {}", record.description);
    println!("User: {}", record.name);
    Ok(())
}
