pub mod booking;
pub mod event;
pub mod ids;
pub mod money;
pub mod vendor;

pub use booking::{BookingRecord, BookingState};
pub use event::{BudgetLevel, EventType};
pub use ids::VendorId;
pub use money::Money;
pub use vendor::VendorRecord;
