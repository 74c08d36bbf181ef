use anyhow::Result;
use eventecho_core::{estimate, BudgetLevel, EventType};

pub fn show_budget(event_type: EventType, guests: u32, budget: BudgetLevel) -> Result<()> {
    let breakdown = estimate(event_type.as_str(), guests, budget.as_str());
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}
