use anyhow::Result;
use eventecho_planner::{Planner, NO_VENDORS};

pub fn search_vendors(planner: &Planner, query: &str, top: usize) -> Result<()> {
    let recommendations = planner.recommender().recommend(query, top);

    if recommendations.is_empty() {
        println!("{NO_VENDORS}");
        return Ok(());
    }

    println!("\n🔍 Vendors matching \"{query}\"\n");
    for (rank, rec) in recommendations.iter().enumerate() {
        println!("{:>3}. [{:.3}] {}", rank + 1, rec.score, rec.vendor.summary_line());
        if !rec.vendor.services.is_empty() {
            println!("       {}", rec.vendor.services);
        }
    }
    Ok(())
}
