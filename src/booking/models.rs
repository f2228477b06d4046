use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored appointment as returned by `GET /api/appointments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub service: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Canonical 24-hour time, `HH:MM:SS`
    pub time: String,
}

/// Record identifier; the backend may send numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An entry of `GET /api/services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
}

/// Body of `POST /api/appointments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub date: String,
    /// Already normalized to `HH:MM:SS`
    pub time: String,
}

/// Failure body returned by the backend with a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

/// What the booking form collects. `time` is a slot label such as `"9:00 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookingRequest {
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

/// The subset of a booking the conflict rules look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedBooking<'a> {
    pub client_name: &'a str,
    pub date: &'a str,
    /// Slot label, normalized before comparison
    pub time: &'a str,
}

impl<'a> ProposedBooking<'a> {
    pub fn new(client_name: &'a str, date: &'a str, time: &'a str) -> Self {
        Self {
            client_name,
            date,
            time,
        }
    }
}

impl BookingRequest {
    /// View of the request used by the conflict checker
    pub fn proposed(&self) -> ProposedBooking<'_> {
        ProposedBooking::new(&self.client_name, &self.date, &self.time)
    }

    /// Build the POST body, given the already normalized time
    pub fn to_new_appointment(&self, normalized_time: String) -> NewAppointment {
        NewAppointment {
            client_name: self.client_name.clone(),
            client_phone: self.client_phone.clone(),
            service: self.service.clone(),
            date: self.date.clone(),
            time: normalized_time,
        }
    }
}
