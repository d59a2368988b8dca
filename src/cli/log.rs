//! CLI command for reading the activity log

use crate::audit::AuditLogger;
use crate::error::EdubudgetResult;

use super::view::CliContext;

/// Print the most recent activity entries
pub fn handle_log(ctx: &CliContext, count: usize) -> EdubudgetResult<()> {
    let logger = AuditLogger::new(ctx.paths.activity_log());

    if !logger.exists() {
        println!("No activity recorded yet.");
        if !ctx.settings.activity_log_enabled {
            println!("Activity logging is disabled in settings.");
        }
        return Ok(());
    }

    let entries = logger.read_recent(count)?;
    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );
    println!();
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
