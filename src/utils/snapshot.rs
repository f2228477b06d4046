use crate::booking::models::{Appointment, Service};
use crate::error::BookingResult;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> BookingResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read an appointment snapshot saved from `GET /api/appointments`
pub fn load_appointments(path: &Path) -> BookingResult<Vec<Appointment>> {
    let appointments: Vec<Appointment> = read_json(path)?;
    debug!("Loaded {} appointments from {}", appointments.len(), path.display());
    Ok(appointments)
}

/// Read a service list saved from `GET /api/services`
pub fn load_services(path: &Path) -> BookingResult<Vec<Service>> {
    read_json(path)
}
