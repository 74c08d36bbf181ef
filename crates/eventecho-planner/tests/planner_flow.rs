//! End-to-end tests for planning and booking.
//!
//! The generation service is replaced by in-process stubs so these run
//! without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use eventecho_core::{BookingLog, BookingState, Catalog, ValidationError, VendorRecord};
use eventecho_planner::{
    BookingContact, BookingStatus, DisabledGenerator, EventRequest, GenerationFailure,
    GenerationRequest, PlanSettings, PlanSource, Planner, TextGenerator, NO_VENDORS,
};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct Echo {
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("PLAN ({} chars of prompt)", request.prompt.len()))
    }
}

#[derive(Debug)]
struct Hang;

#[async_trait]
impl TextGenerator for Hang {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationFailure> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok("never".to_string())
    }
}

fn catalog() -> Catalog {
    Catalog::from_records(vec![
        VendorRecord::new("Sunrise Catering", "Catering", "Austin", "buffet plated dinner"),
        VendorRecord::new("Elegant Events", "Venue", "Austin", "ballroom garden wedding"),
        VendorRecord::new("Beat Box DJs", "Entertainment", "Dallas", "dj lighting dance floor"),
        VendorRecord::new("Petal Perfect", "Florist", "Houston", "wedding bouquets centerpieces"),
    ])
}

fn planner(generator: Arc<dyn TextGenerator>, dir: &TempDir) -> Planner {
    let settings = PlanSettings {
        vendor_count: 2,
        timeout: Duration::from_millis(100),
        ..PlanSettings::default()
    };
    Planner::with_catalog(
        catalog(),
        generator,
        BookingLog::new(dir.path().join("bookings.csv")),
        settings,
    )
}

fn wedding() -> EventRequest {
    EventRequest::new("Wedding", 100, "Standard", "Austin", "garden wedding with buffet")
}

#[tokio::test]
async fn test_generated_plan_is_used() {
    let dir = TempDir::new().unwrap();
    let echo = Arc::new(Echo::default());
    let planner = planner(echo.clone(), &dir);

    let plan = planner.synthesize(&wedding()).await;

    assert_eq!(plan.source, PlanSource::Generated);
    assert!(plan.plan.starts_with("PLAN"));
    assert_eq!(echo.calls.load(Ordering::SeqCst), 1);
    assert_eq!(plan.recommendations.len(), 2);
    assert_eq!(plan.budget.total_estimate.to_string(), "$15000.00");
}

#[tokio::test]
async fn test_timeout_falls_back_to_template() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(Hang), &dir);

    let plan = planner.synthesize(&wedding()).await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert!(plan.plan.contains("CREATIVE EVENT PLAN FOR YOUR WEDDING"));
    assert!(plan.plan.contains(&plan.vendors));
    assert!(plan.plan.contains("\"Venue/Catering\": \"$8250.00\""));
}

#[tokio::test]
async fn test_no_token_uses_template() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);

    let plan = planner
        .synthesize(&EventRequest::new("Birthday", 20, "Budget", "Dallas", "dance party"))
        .await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert!(plan.plan.contains("YOUR BIRTHDAY"));
    assert!(plan.vendors.contains("Beat Box DJs"));
}

#[tokio::test]
async fn test_vendor_list_is_ranked_and_bounded() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);

    let plan = planner.synthesize(&wedding()).await;

    let lines: Vec<&str> = plan.vendors.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.starts_with("• ")));
    let scores: Vec<f64> = plan.recommendations.iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[tokio::test]
async fn test_empty_catalog_still_plans() {
    let dir = TempDir::new().unwrap();
    let planner = Planner::with_catalog(
        Catalog::from_records(Vec::new()),
        Arc::new(DisabledGenerator),
        BookingLog::new(dir.path().join("bookings.csv")),
        PlanSettings::default(),
    );

    let plan = planner.synthesize(&wedding()).await;

    assert_eq!(plan.vendors, NO_VENDORS);
    assert!(plan.recommendations.is_empty());
    assert_eq!(plan.source, PlanSource::Fallback);
}

#[test]
fn test_booking_appends_pending_row() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);

    let status = planner.flag_booking(&wedding(), &BookingContact::new(" planner@example.com ", ""));

    assert!(status.is_flagged(), "{}", status.message());
    assert!(status.message().contains("📧 Email: planner@example.com"));

    let rows = planner.bookings().read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "planner@example.com");
    assert_eq!(rows[0].guest_count, 100);
    assert_eq!(rows[0].status, BookingState::Pending);
}

#[test]
fn test_invalid_email_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);

    let status = planner.flag_booking(&wedding(), &BookingContact::new("not-an-email", ""));

    assert_eq!(status, BookingStatus::Rejected(ValidationError::InvalidEmail));
    assert_eq!(status.message(), "❌ Please enter a valid email address");
    assert!(!planner.bookings().path().exists());
}

#[test]
fn test_missing_event_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);
    let request = EventRequest::new("  ", 10, "Budget", "Austin", "");

    let status = planner.flag_booking(&request, &BookingContact::new("a@b.co", ""));

    assert!(matches!(
        status,
        BookingStatus::Rejected(ValidationError::MissingField(_))
    ));
    assert!(planner.bookings().read_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_bookings_are_all_recorded() {
    let dir = TempDir::new().unwrap();
    let planner = planner(Arc::new(DisabledGenerator), &dir);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let planner = planner.clone();
            tokio::task::spawn_blocking(move || {
                let request = EventRequest::new("Corporate", 10 + i, "Luxury", "Austin", "offsite");
                planner.flag_booking(&request, &BookingContact::new(format!("guest{i}@example.com"), ""))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().is_flagged());
    }

    let rows = planner.bookings().read_all().unwrap();
    assert_eq!(rows.len(), 16);
    let raw = std::fs::read_to_string(planner.bookings().path()).unwrap();
    assert_eq!(raw.matches("Timestamp,").count(), 1);
}

#[test]
fn test_unwritable_log_reports_failure() {
    let dir = TempDir::new().unwrap();
    let planner = Planner::with_catalog(
        catalog(),
        Arc::new(DisabledGenerator),
        BookingLog::new(dir.path()),
        PlanSettings::default(),
    );

    let status = planner.flag_booking(&wedding(), &BookingContact::new("a@b.co", ""));

    assert!(matches!(status, BookingStatus::Failed(_)), "{status:?}");
    assert!(!status.is_flagged());
    assert!(status.message().starts_with("❌ Error:"));
}
