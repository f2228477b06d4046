use super::models::{Appointment, ErrorBody, NewAppointment, Service};
use crate::error::{backend_error, BookingResult, Error};
use async_trait::async_trait;

/// Message used when the backend fails without saying why
pub const DEFAULT_BACKEND_MESSAGE: &str = "Something went wrong";

/// The appointment API the booking flow talks to.
///
/// Implementations map `GET /api/appointments`, `GET /api/services` and
/// `POST /api/appointments`. Non-2xx responses should be turned into
/// [`Error::Backend`], typically through [`backend_failure`].
#[async_trait]
pub trait AppointmentBackend: Send + Sync {
    /// Current appointments
    async fn fetch_appointments(&self) -> BookingResult<Vec<Appointment>>;

    /// Services offered
    async fn fetch_services(&self) -> BookingResult<Vec<Service>>;

    /// Store a new appointment and return it as created
    async fn create_appointment(&self, appointment: NewAppointment) -> BookingResult<Appointment>;
}

/// Build the error for a failed response from its status and raw body
pub fn backend_failure(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty());

    backend_error(status, message.as_deref().unwrap_or(DEFAULT_BACKEND_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: Error) -> (u16, String) {
        match err {
            Error::Backend { status, message } => (status, message),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_message() {
        let err = backend_failure(400, r#"{"error": "Horario no disponible"}"#);
        assert_eq!(message_of(err), (400, "Horario no disponible".to_string()));
    }

    #[test]
    fn test_fallback_message() {
        for body in ["", "<html>502</html>", r#"{"error": ""}"#, r#"{"detail": "x"}"#] {
            let (status, message) = message_of(backend_failure(502, body));
            assert_eq!(status, 502);
            assert_eq!(message, DEFAULT_BACKEND_MESSAGE);
        }
    }
}
