//! Deterministic budget estimation.
//!
//! The estimate is a pure function of event type, guest count, and budget
//! level, driven by fixed per-guest base costs and tier multipliers.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::model::{BudgetLevel, EventType, Money};

/// Per-guest base cost used for event types with no table entry.
pub const DEFAULT_BASE_COST: f64 = 80.0;

/// Multiplier used for budget levels with no table entry.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Guest count assumed when none (or garbage) is supplied.
pub const DEFAULT_GUEST_COUNT: u32 = 50;

/// A spending category in the budget breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetCategory {
    VenueCatering,
    Decorations,
    Entertainment,
    Contingency,
}

impl BudgetCategory {
    /// Categories in presentation order.
    pub const ALL: [Self; 4] = [
        Self::VenueCatering,
        Self::Decorations,
        Self::Entertainment,
        Self::Contingency,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VenueCatering => "Venue/Catering",
            Self::Decorations => "Decorations",
            Self::Entertainment => "Entertainment",
            Self::Contingency => "Misc/Contingency",
        }
    }

    /// Share of the total estimate allocated to this category.
    ///
    /// The shares across [`BudgetCategory::ALL`] sum to 1.
    #[must_use]
    pub const fn share(&self) -> f64 {
        match self {
            Self::VenueCatering => 0.55,
            Self::Decorations | Self::Entertainment | Self::Contingency => 0.15,
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category allocations in presentation order.
///
/// Serializes as a JSON object keyed by category label.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown(Vec<(BudgetCategory, Money)>);

impl Breakdown {
    fn allocate(total: Money) -> Self {
        Self(
            BudgetCategory::ALL
                .iter()
                .map(|category| (*category, total * category.share()))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, category: BudgetCategory) -> Option<Money> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(BudgetCategory, Money)> {
        self.0.iter()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().map(|(_, amount)| amount.amount()).sum()
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, amount) in &self.0 {
            map.serialize_entry(category.label(), amount)?;
        }
        map.end()
    }
}

/// A cost estimate for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBreakdown {
    pub per_guest: Money,
    pub total_estimate: Money,
    pub breakdown: Breakdown,
}

impl BudgetBreakdown {
    /// The breakdown as pretty-printed JSON, as embedded in fallback plans.
    #[must_use]
    pub fn breakdown_json(&self) -> String {
        serde_json::to_string_pretty(&self.breakdown).unwrap_or_default()
    }
}

/// Estimate the cost of an event.
///
/// Event type and budget level are matched case-insensitively; unknown
/// values fall back to [`DEFAULT_BASE_COST`] and [`DEFAULT_MULTIPLIER`].
#[must_use]
pub fn estimate(event_type: &str, guest_count: u32, budget_level: &str) -> BudgetBreakdown {
    let base = EventType::parse(event_type).map_or(DEFAULT_BASE_COST, |t| t.base_cost_per_guest());
    let multiplier = BudgetLevel::parse(budget_level).map_or(DEFAULT_MULTIPLIER, |l| l.multiplier());

    let per_guest = Money::new(base * multiplier);
    let total = per_guest * f64::from(guest_count);

    BudgetBreakdown {
        per_guest,
        total_estimate: total,
        breakdown: Breakdown::allocate(total),
    }
}

/// Coerce a raw guest count into a non-negative integer.
///
/// Missing, blank, or unparseable input yields [`DEFAULT_GUEST_COUNT`].
/// Fractions truncate toward zero and negatives clamp to zero.
#[must_use]
pub fn coerce_guest_count(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_GUEST_COUNT;
    };

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if n <= 0.0 {
                0
            } else if n >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                n.trunc() as u32
            }
        }
        _ => DEFAULT_GUEST_COUNT,
    }
}
