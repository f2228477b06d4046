use super::backend::AppointmentBackend;
use super::conflict::{check_conflict, slot_availability, ConflictResult, SlotAvailability};
use super::models::{Appointment, BookingRequest, Service};
use crate::error::BookingResult;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Headline shown after a successful booking
pub const BOOKED_MESSAGE: &str = "La cita fue programada exitosamente!";

/// A stored booking and the text to confirm it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub appointment: Appointment,
    pub message: &'static str,
    /// `"{date} a las {slot label}"`
    pub description: String,
}

/// Result of a booking attempt that reached the conflict check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked(Confirmation),
    Rejected(ConflictResult),
}

/// Runs the booking flow against a backend
pub struct BookingService<B: AppointmentBackend> {
    backend: Arc<B>,
}

impl<B: AppointmentBackend> Clone for BookingService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: AppointmentBackend> BookingService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Share an existing backend
    pub fn with_backend(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Services for the selector
    pub async fn services(&self) -> BookingResult<Vec<Service>> {
        self.backend.fetch_services().await
    }

    /// Slot availability on `date`, from a fresh snapshot
    pub async fn availability(&self, date: &str) -> BookingResult<Vec<SlotAvailability>> {
        let existing = self.backend.fetch_appointments().await?;
        slot_availability(date, &existing)
    }

    /// Validate, check against a freshly fetched snapshot and submit.
    ///
    /// Nothing is submitted when the check finds a conflict. Another client
    /// can still book the same slot between the fetch and the POST; only the
    /// backend can rule that out.
    pub async fn book(&self, request: &BookingRequest, today: NaiveDate) -> BookingResult<BookingOutcome> {
        let services = self.backend.fetch_services().await?;
        let time = request.validate(today, Some(services.as_slice()))?;

        let existing = self.backend.fetch_appointments().await?;
        debug!("Checking booking against {} existing appointments", existing.len());

        let result = check_conflict(&request.proposed(), &existing)?;
        if result.is_conflict() {
            warn!(
                "Rejected booking for {} on {} at {}: {:?}",
                request.client_name, request.date, request.time, result
            );
            return Ok(BookingOutcome::Rejected(result));
        }

        let appointment = match self
            .backend
            .create_appointment(request.to_new_appointment(time))
            .await
        {
            Ok(appointment) => appointment,
            Err(e) => {
                error!("Failed to create appointment: {}", e);
                return Err(e);
            }
        };

        info!(
            "Booked {} on {} at {}",
            appointment.client_name, appointment.date, appointment.time
        );

        Ok(BookingOutcome::Booked(Confirmation {
            appointment,
            message: BOOKED_MESSAGE,
            description: format!("{} a las {}", request.date, request.time),
        }))
    }
}
