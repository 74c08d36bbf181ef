use anyhow::Result;
use eventecho_planner::{EventPlan, EventRequest, PlanSource, Planner};

pub async fn run_plan(planner: &Planner, request: &EventRequest, json: bool) -> Result<()> {
    log::info!(
        "Planning {} for {} guests in {}",
        request.event_type,
        request.guest_count,
        request.location
    );

    let plan = planner.synthesize(request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan)?;
    }
    Ok(())
}

fn print_plan(plan: &EventPlan) -> Result<()> {
    println!("\n📋 Event Plan\n");
    println!("{}", plan.plan.trim_end());
    if plan.source == PlanSource::Fallback {
        println!("\n  (offline template; set hf_api_token for a generated plan)");
    }

    println!("\n💰 Budget Estimate\n");
    println!("{}", serde_json::to_string_pretty(&plan.budget)?);

    println!("\n🏪 Recommended Vendors\n");
    println!("{}", plan.vendors);
    Ok(())
}
