//! Plan synthesis: prompt construction and the offline fallback plan.

use serde::Serialize;

use eventecho_core::{coerce_guest_count, BudgetBreakdown};

use crate::generation::GenerationOutcome;
use crate::recommend::Recommendation;

/// The planning form: everything the user tells us about the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRequest {
    pub event_type: String,
    pub guest_count: u32,
    pub budget_level: String,
    pub location: String,
    pub description: String,
}

impl EventRequest {
    #[must_use]
    pub fn new(
        event_type: impl Into<String>,
        guest_count: u32,
        budget_level: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            guest_count,
            budget_level: budget_level.into(),
            location: location.into(),
            description: description.into(),
        }
    }

    /// Build a request from a raw guest count, defaulting it when missing
    /// or unparseable.
    #[must_use]
    pub fn with_raw_guest_count(
        event_type: impl Into<String>,
        guest_count: Option<&str>,
        budget_level: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            event_type,
            coerce_guest_count(guest_count),
            budget_level,
            location,
            description,
        )
    }

    /// The search query: every structured field plus the free-text request.
    #[must_use]
    pub fn composite_query(&self) -> String {
        format!(
            "{} {} {} guests {} {}",
            self.event_type, self.location, self.guest_count, self.budget_level, self.description
        )
    }
}

/// Where the plan text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Generated,
    Fallback,
}

/// The three views produced for one planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPlan {
    pub plan: String,
    pub budget: BudgetBreakdown,
    pub vendors: String,
    #[serde(skip)]
    pub recommendations: Vec<Recommendation>,
    #[serde(skip)]
    pub source: PlanSource,
}

/// The prompt sent to the generation service.
#[must_use]
pub fn build_prompt(request: &EventRequest, vendors: &str) -> String {
    format!(
        "\
You are EventEcho, a professional event planner with 20+ years of experience.

EVENT DETAILS:
- Type: {event_type}
- Guest Count: {guests}
- Budget Level: {budget}
- Location: {location}
- Special Request: {description}

RECOMMENDED VENDORS:
{vendors}

Create a CREATIVE and DETAILED event plan with:
1. Event Concept & Theme
2. Detailed Timeline
3. Vendor Coordination Strategy
4. Creative Decorations Ideas
5. Guest Experience Flow
6. Contingency Plans

Be inspiring and actionable!
",
        event_type = request.event_type,
        guests = request.guest_count,
        budget = request.budget_level,
        location = request.location,
        description = request.description,
    )
}

/// A plan built purely from local data, used whenever generation fails.
#[must_use]
pub fn fallback_plan(event_type: &str, vendors: &str, budget: &BudgetBreakdown) -> String {
    format!(
        "\
🎉 CREATIVE EVENT PLAN FOR YOUR {heading}

TOP VENDORS:
{vendors}

BUDGET BREAKDOWN:
{breakdown}

TIMELINE:
• 8 weeks: Secure venue and caterer
• 4 weeks: Confirm vendors and guest list
• 2 weeks: Final planning
• Day before: Setup
• Day of: 2 hours early
",
        heading = event_type.to_uppercase(),
        breakdown = budget.breakdown_json(),
    )
}

/// Pick the generated text, or fall back to the local plan.
#[must_use]
pub fn compose_plan(
    outcome: &GenerationOutcome,
    event_type: &str,
    vendors: &str,
    budget: &BudgetBreakdown,
) -> (String, PlanSource) {
    match outcome {
        GenerationOutcome::Generated(text) if !text.trim().is_empty() => {
            (text.clone(), PlanSource::Generated)
        }
        GenerationOutcome::Generated(_) => {
            log::warn!("Generation returned blank text; using fallback plan");
            (fallback_plan(event_type, vendors, budget), PlanSource::Fallback)
        }
        GenerationOutcome::Failed(failure) => {
            log::warn!("Plan generation failed ({failure}); using fallback plan");
            (fallback_plan(event_type, vendors, budget), PlanSource::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationFailure;
    use eventecho_core::estimate;

    fn request() -> EventRequest {
        EventRequest::new("Wedding", 100, "Standard", "Austin", "Garden ceremony at dusk")
    }

    #[test]
    fn test_composite_query() {
        assert_eq!(
            request().composite_query(),
            "Wedding Austin 100 guests Standard Garden ceremony at dusk"
        );
    }

    #[test]
    fn test_raw_guest_count_defaults() {
        let req = EventRequest::with_raw_guest_count("Birthday", None, "Budget", "Reno", "");
        assert_eq!(req.guest_count, 50);
        let req = EventRequest::with_raw_guest_count("Birthday", Some("12"), "Budget", "Reno", "");
        assert_eq!(req.guest_count, 12);
    }

    #[test]
    fn test_prompt_embeds_details_and_vendors() {
        let vendors = "• Sunrise Catering (Catering) - Austin";
        let prompt = build_prompt(&request(), vendors);
        assert!(prompt.contains("- Type: Wedding"));
        assert!(prompt.contains("- Guest Count: 100"));
        assert!(prompt.contains("- Budget Level: Standard"));
        assert!(prompt.contains("- Location: Austin"));
        assert!(prompt.contains("- Special Request: Garden ceremony at dusk"));
        assert!(prompt.contains("RECOMMENDED VENDORS:\n• Sunrise Catering (Catering) - Austin"));
        assert!(prompt.contains("6. Contingency Plans"));
    }

    #[test]
    fn test_fallback_plan_contents() {
        let budget = estimate("wedding", 100, "standard");
        let vendors = "• Sunrise Catering (Catering) - Austin";
        let plan = fallback_plan("Wedding", vendors, &budget);
        assert!(plan.contains("CREATIVE EVENT PLAN FOR YOUR WEDDING"));
        assert!(plan.contains(vendors));
        assert!(plan.contains("\"Venue/Catering\": \"$8250.00\""));
        assert!(plan.contains("• 8 weeks: Secure venue and caterer"));
        assert!(plan.contains("• Day of: 2 hours early"));
    }

    #[test]
    fn test_compose_prefers_generated_text() {
        let budget = estimate("wedding", 100, "standard");
        let outcome = GenerationOutcome::Generated("A moonlit garden wedding".to_string());
        let (plan, source) = compose_plan(&outcome, "Wedding", "", &budget);
        assert_eq!(plan, "A moonlit garden wedding");
        assert_eq!(source, PlanSource::Generated);
    }

    #[test]
    fn test_compose_falls_back_on_failure() {
        let budget = estimate("wedding", 100, "standard");
        let vendors = "• Elegant Events (Venue) - Austin";
        for failure in [
            GenerationFailure::Timeout,
            GenerationFailure::RateLimited,
            GenerationFailure::Malformed("bad".to_string()),
            GenerationFailure::Unconfigured,
        ] {
            let (plan, source) =
                compose_plan(&GenerationOutcome::Failed(failure), "Wedding", vendors, &budget);
            assert_eq!(source, PlanSource::Fallback);
            assert!(plan.contains(vendors));
            assert!(plan.contains("BUDGET BREAKDOWN"));
        }
    }

    #[test]
    fn test_compose_falls_back_on_blank_text() {
        let budget = estimate("birthday", 10, "budget");
        let (plan, source) =
            compose_plan(&GenerationOutcome::Generated(" ".to_string()), "Birthday", "", &budget);
        assert_eq!(source, PlanSource::Fallback);
        assert!(plan.contains("YOUR BIRTHDAY"));
    }

    #[test]
    fn test_event_plan_serializes_three_views() {
        let budget = estimate("wedding", 100, "standard");
        let plan = EventPlan {
            plan: "plan".to_string(),
            budget,
            vendors: "vendors".to_string(),
            recommendations: Vec::new(),
            source: PlanSource::Fallback,
        };
        let json = serde_json::to_value(&plan).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(json["budget"]["total_estimate"], "$15000.00");
    }
}
