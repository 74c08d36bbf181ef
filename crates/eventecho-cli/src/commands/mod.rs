pub mod book;
pub mod bookings;
pub mod budget;
pub mod config;
pub mod plan;
pub mod vendors;

pub use book::run_book;
pub use bookings::list_bookings;
pub use budget::show_budget;
pub use plan::run_plan;
pub use vendors::search_vendors;
