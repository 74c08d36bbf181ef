use anyhow::{Context, Result};
use eventecho_core::BookingLog;
use std::path::Path;

pub fn list_bookings(path: &Path, limit: Option<usize>) -> Result<()> {
    let log = BookingLog::new(path);
    let records = log
        .read_all()
        .with_context(|| format!("Failed to read booking log {}", path.display()))?;

    if records.is_empty() {
        println!("No bookings yet ({})", path.display());
        return Ok(());
    }

    let skip = limit.map_or(0, |n| records.len().saturating_sub(n));

    println!("\n📒 Bookings ({} total)\n", records.len());
    for record in &records[skip..] {
        println!(
            "  {}  {:<10} {:>5} guests  {:<8}  {:<20} {}  [{}]",
            record.formatted_timestamp(),
            record.event_type,
            record.guest_count,
            record.budget_level,
            record.location,
            record.email,
            record.status
        );
    }
    Ok(())
}
