use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of event being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Wedding,
    Birthday,
    Corporate,
    Conference,
    Graduation,
    Other,
}

impl EventType {
    pub const ALL: [Self; 6] = [
        Self::Wedding,
        Self::Birthday,
        Self::Corporate,
        Self::Conference,
        Self::Graduation,
        Self::Other,
    ];

    /// Parse an event type name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "wedding" => Some(Self::Wedding),
            "birthday" => Some(Self::Birthday),
            "corporate" => Some(Self::Corporate),
            "conference" => Some(Self::Conference),
            "graduation" => Some(Self::Graduation),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Birthday => "Birthday",
            Self::Corporate => "Corporate",
            Self::Conference => "Conference",
            Self::Graduation => "Graduation",
            Self::Other => "Other",
        }
    }

    /// Base cost per guest, in dollars, before the budget multiplier.
    #[must_use]
    pub const fn base_cost_per_guest(&self) -> f64 {
        match self {
            Self::Wedding => 150.0,
            Self::Birthday => 50.0,
            Self::Corporate => 100.0,
            Self::Conference => 200.0,
            Self::Graduation => 75.0,
            Self::Other => 80.0,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How lavish the event should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetLevel {
    Budget,
    Standard,
    Luxury,
}

impl BudgetLevel {
    pub const ALL: [Self; 3] = [Self::Budget, Self::Standard, Self::Luxury];

    /// Parse a budget level name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "budget" => Some(Self::Budget),
            "standard" => Some(Self::Standard),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Standard => "Standard",
            Self::Luxury => "Luxury",
        }
    }

    /// Multiplier applied to the per-guest base cost.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Budget => 0.8,
            Self::Standard => 1.0,
            Self::Luxury => 1.8,
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
