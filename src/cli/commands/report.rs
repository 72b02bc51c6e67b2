use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::log::LogStore;
use crate::ui::messages;
use crate::utils::{date, time};

/// Handle the `report` command: per-day totals over the historical log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date: date_arg } = cmd {
        //
        // 1. Resolve the target date (default: today, local)
        //
        let target = match date_arg {
            Some(s) => date::parse_date(s)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?
                .format("%Y-%m-%d")
                .to_string(),
            None => date::today().format("%Y-%m-%d").to_string(),
        };

        //
        // 2. Scan the log
        //
        let log = LogStore::new(cfg);
        let report = log.scan_day(&target)?;

        for (row_no, reason) in &report.skipped {
            messages::warning(format!("skipping malformed log row {}: {}", row_no, reason));
        }

        if report.rows.is_empty() {
            println!("No entries for {}", target);
            return Ok(());
        }

        //
        // 3. Render
        //
        println!("\n=== Daily Report for {} ===", target);
        println!("Total Hours: {}", time::format_hours(report.total_hours));
        println!("Total Entries: {}", report.rows.len());
        println!("\nDetails:");
        println!("{}", "-".repeat(70));
        for row in &report.rows {
            println!("{}", row);
        }
        println!("{}", "-".repeat(70));
        println!("Total: {} hours", time::format_hours(report.total_hours));
    }
    Ok(())
}
