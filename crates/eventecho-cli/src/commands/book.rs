use anyhow::{bail, Result};
use eventecho_planner::{BookingContact, EventRequest, Planner};

pub fn run_book(planner: &Planner, request: &EventRequest, email: String, notes: String) -> Result<()> {
    let status = planner.flag_booking(request, &BookingContact::new(email, notes));

    if status.is_flagged() {
        println!("{}", status.message());
        println!("\n  Logged to {}", planner.bookings().path().display());
        Ok(())
    } else {
        eprintln!("{}", status.message());
        bail!("Booking was not recorded");
    }
}
