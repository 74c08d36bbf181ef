//! Event planning services for eventecho.
//!
//! Ties the vendor index, the budget estimator, the text-generation
//! client, and the booking log together behind a single [`Planner`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod booking;
pub mod config;
pub mod error;
pub mod generation;
pub mod planner;
pub mod recommend;
pub mod synthesize;

pub use booking::{BookingContact, BookingStatus};
pub use config::Config;
pub use error::{Error, Result};
pub use generation::{
    DisabledGenerator, GenerationFailure, GenerationOutcome, GenerationRequest, HuggingFaceClient,
    RetryPolicy, TextGenerator,
};
pub use planner::{PlanSettings, Planner};
pub use recommend::{vendor_list, Recommendation, Recommender, NO_VENDORS};
pub use synthesize::{EventPlan, EventRequest, PlanSource};
