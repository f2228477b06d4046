use super::models::{BookingRequest, Service};
use super::time::normalize_time;
use crate::error::{BookingResult, Error};
use chrono::NaiveDate;

/// Date format used by the form and the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date. Only the zero-padded form is accepted, since
/// the conflict rules compare dates as strings.
pub fn parse_date(date: &str) -> BookingResult<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(date.to_string()))?;
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(Error::InvalidDate(date.to_string()));
    }
    Ok(parsed)
}

impl BookingRequest {
    /// Names of the fields left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client_name", &self.client_name),
            ("client_phone", &self.client_phone),
            ("service", &self.service),
            ("date", &self.date),
            ("time", &self.time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check the form before any conflict check and return the normalized time.
    ///
    /// `services` is the list the selector was populated from; when it is
    /// `None` any non-blank service name is accepted.
    pub fn validate(&self, today: NaiveDate, services: Option<&[Service]>) -> BookingResult<String> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        let date = parse_date(&self.date)?;
        if date < today {
            return Err(Error::DateInPast(self.date.clone()));
        }

        let time = normalize_time(&self.time)?;

        if let Some(services) = services {
            if !services.iter().any(|service| service.name == self.service) {
                return Err(Error::UnknownService(self.service.clone()));
            }
        }

        Ok(time)
    }
}
