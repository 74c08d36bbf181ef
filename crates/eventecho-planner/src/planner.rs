//! The planner context: every piece of process-wide state, built once.

use std::sync::Arc;
use std::time::Duration;

use eventecho_core::{estimate, BookingLog, Catalog};
use eventecho_search::IndexOptions;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generation::{
    self, DisabledGenerator, GenerationRequest, HuggingFaceClient, RetryPolicy, TextGenerator,
};
use crate::recommend::{vendor_list, Recommender};
use crate::synthesize::{build_prompt, compose_plan, EventPlan, EventRequest};

/// Per-request knobs for plan synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanSettings {
    pub vendor_count: usize,
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            vendor_count: 5,
            max_new_tokens: 500,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PlanSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            vendor_count: config.vendor_count,
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            timeout: config.request_timeout(),
        }
    }
}

/// Immutable application context shared by every request.
///
/// The catalog, index, and generator are read-only; the booking log
/// serializes its own writes. Cloning is cheap and clones share state.
#[derive(Debug, Clone)]
pub struct Planner {
    recommender: Recommender,
    generator: Arc<dyn TextGenerator>,
    bookings: Arc<BookingLog>,
    settings: PlanSettings,
}

impl Planner {
    /// Assemble a planner from already-built parts.
    #[must_use]
    pub fn new(
        recommender: Recommender,
        generator: Arc<dyn TextGenerator>,
        bookings: BookingLog,
        settings: PlanSettings,
    ) -> Self {
        Self {
            recommender,
            generator,
            bookings: Arc::new(bookings),
            settings,
        }
    }

    /// Load the catalog, build the index, and wire up the generation client.
    ///
    /// # Errors
    /// Fails when the catalog cannot be loaded, the index settings are
    /// invalid, or the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let options = config
            .index_options()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;

        let generator: Arc<dyn TextGenerator> = match config.api_token() {
            Some(token) => {
                let client = HuggingFaceClient::new(
                    &config.inference_url,
                    &config.model,
                    token,
                    config.request_timeout(),
                )?
                .with_retry(RetryPolicy::default().with_max_retries(config.max_retries));
                log::debug!("Plan generation via {}", client.endpoint());
                Arc::new(client)
            }
            None => {
                log::warn!("No hf_api_token configured; plans will use the offline template");
                Arc::new(DisabledGenerator)
            }
        };

        Ok(Self::new(
            Recommender::build(catalog, &options),
            generator,
            BookingLog::new(&config.bookings_path),
            PlanSettings::from_config(config),
        ))
    }

    /// Build a planner over an in-memory catalog with default index options.
    #[must_use]
    pub fn with_catalog(
        catalog: Catalog,
        generator: Arc<dyn TextGenerator>,
        bookings: BookingLog,
        settings: PlanSettings,
    ) -> Self {
        Self::new(
            Recommender::build(catalog, &IndexOptions::default()),
            generator,
            bookings,
            settings,
        )
    }

    #[must_use]
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    #[must_use]
    pub fn bookings(&self) -> &BookingLog {
        &self.bookings
    }

    #[must_use]
    pub fn settings(&self) -> &PlanSettings {
        &self.settings
    }

    /// Recommend vendors, estimate the budget, and produce a plan.
    ///
    /// Always returns a usable plan: generation failures of any kind are
    /// replaced by the offline template.
    pub async fn synthesize(&self, request: &EventRequest) -> EventPlan {
        let recommendations = self
            .recommender
            .recommend(&request.composite_query(), self.settings.vendor_count);
        let vendors = vendor_list(&recommendations);
        let budget = estimate(&request.event_type, request.guest_count, &request.budget_level);

        let generation_request = GenerationRequest {
            prompt: build_prompt(request, &vendors),
            max_new_tokens: self.settings.max_new_tokens,
            temperature: self.settings.temperature,
        };
        let outcome = generation::generate(
            self.generator.as_ref(),
            &generation_request,
            self.settings.timeout,
        )
        .await;

        let (plan, source) = compose_plan(&outcome, &request.event_type, &vendors, &budget);
        log::info!(
            "Planned {} for {} guests ({} vendors, {:?} plan)",
            request.event_type,
            request.guest_count,
            recommendations.len(),
            source
        );

        EventPlan {
            plan,
            budget,
            vendors,
            recommendations,
            source,
        }
    }
}
