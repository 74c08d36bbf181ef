//! Flagging an event for booking follow-up.

use eventecho_core::validation::{require, validate_email};
use eventecho_core::{BookingRecord, ValidationError};

use crate::planner::Planner;
use crate::synthesize::EventRequest;

/// Contact details from the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingContact {
    pub email: String,
    /// Free-form notes. Echoed back to the user; the log has no column
    /// for them.
    pub notes: String,
}

impl BookingContact {
    #[must_use]
    pub fn new(email: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            notes: notes.into(),
        }
    }
}

/// Result of a booking attempt, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    /// A `Pending` row was appended to the log.
    Flagged {
        record: BookingRecord,
        message: String,
    },
    /// The input was invalid; nothing was written.
    Rejected(ValidationError),
    /// The log could not be written.
    Failed(String),
}

impl BookingStatus {
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged { .. })
    }

    /// The status line shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Flagged { message, .. } => message.clone(),
            Self::Rejected(err) => format!("❌ {err}"),
            Self::Failed(reason) => format!("❌ Error: {reason}"),
        }
    }
}

impl Planner {
    /// Validate the contact, then append a `Pending` booking.
    ///
    /// Never panics and never returns an error: every outcome is a
    /// [`BookingStatus`] the caller can show as-is.
    pub fn flag_booking(&self, request: &EventRequest, contact: &BookingContact) -> BookingStatus {
        let email = match validate_email(&contact.email)
            .and_then(|email| require("event type", &request.event_type).map(|()| email))
        {
            Ok(email) => email,
            Err(err) => {
                log::info!("Booking rejected: {err}");
                return BookingStatus::Rejected(err);
            }
        };

        let record = BookingRecord::pending(
            &request.event_type,
            request.guest_count,
            &request.budget_level,
            &request.location,
            email,
            &request.description,
        );

        match self.bookings().append(&record) {
            Ok(()) => {
                let message = success_message(&record, &contact.notes);
                BookingStatus::Flagged { record, message }
            }
            Err(err) => {
                log::error!("Failed to record booking: {err}");
                BookingStatus::Failed(err.to_string())
            }
        }
    }
}

fn success_message(record: &BookingRecord, notes: &str) -> String {
    let mut message = format!(
        "\
✅ SUCCESS! Your event has been flagged for booking.

📧 Email: {}
📋 Event: {}
👥 Guests: {}
💰 Budget: {}
📍 Location: {}
",
        record.email, record.event_type, record.guest_count, record.budget_level, record.location
    );
    let notes = notes.trim();
    if !notes.is_empty() {
        message.push_str("📝 Notes: ");
        message.push_str(notes);
        message.push('\n');
    }
    message.push_str("\nOur team will contact you within 24 hours!");
    message
}
