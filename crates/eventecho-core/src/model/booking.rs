use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of the `Timestamp` column in the booking log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Follow-up state of a flagged event.
///
/// New bookings are always `Pending`; any other value can only come from
/// a log that was edited outside this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingState {
    Pending,
    Recorded(String),
}

impl BookingState {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "Pending" {
            Self::Pending
        } else {
            Self::Recorded(value.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Recorded(value) => value,
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the booking log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub timestamp: NaiveDateTime,
    pub event_type: String,
    pub guest_count: u32,
    pub budget_level: String,
    pub location: String,
    pub email: String,
    pub description: String,
    pub status: BookingState,
}

impl BookingRecord {
    /// Create a `Pending` booking stamped with the current local time.
    #[must_use]
    pub fn pending(
        event_type: impl Into<String>,
        guest_count: u32,
        budget_level: impl Into<String>,
        location: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            event_type: event_type.into(),
            guest_count,
            budget_level: budget_level.into(),
            location: location.into(),
            email: email.into(),
            description: description.into(),
            status: BookingState::Pending,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_pending_booking() {
        let record = BookingRecord::pending(
            "Wedding",
            120,
            "Luxury",
            "Austin",
            "host@example.com",
            "Garden party",
        );
        assert_eq!(record.status, BookingState::Pending);
        assert_eq!(record.guest_count, 120);
        assert_eq!(record.email, "host@example.com");
    }

    #[test]
    fn test_formatted_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_opt(9, 30, 5))
            .unwrap();
        let record = BookingRecord::pending("Birthday", 20, "Budget", "Reno", "a@b.c", "")
            .with_timestamp(ts);
        assert_eq!(record.formatted_timestamp(), "2024-05-17 09:30:05");
    }

    #[test]
    fn test_booking_state_parse() {
        assert_eq!(BookingState::parse("Pending"), BookingState::Pending);
        assert_eq!(
            BookingState::parse("Confirmed"),
            BookingState::Recorded("Confirmed".to_string())
        );
        assert_eq!(BookingState::Pending.to_string(), "Pending");
    }
}
