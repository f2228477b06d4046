pub mod backend;
pub mod conflict;
pub mod models;
mod service;
pub mod time;
pub mod validation;

pub use backend::{backend_failure, AppointmentBackend};
pub use conflict::{
    check_conflict, is_person_booked, is_slot_taken, is_time_booked, slot_availability,
    ConflictResult, SlotAvailability,
};
pub use models::{Appointment, BookingRequest, NewAppointment, ProposedBooking, Service};
pub use service::{BookingOutcome, BookingService, Confirmation, BOOKED_MESSAGE};
pub use time::{generate_time_slots, normalize_time, time_slots};
