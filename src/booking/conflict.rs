use super::models::{Appointment, ProposedBooking};
use super::time::{normalize_time, time_slots};
use crate::error::BookingResult;
use serde::Serialize;

/// Shown when the client already has an appointment that day
pub const PERSON_ALREADY_BOOKED_MESSAGE: &str =
    "Ya haz agendado una cita para este día, por favor selecciona otra fecha.";

/// Shown when the chosen slot is taken
pub const TIME_ALREADY_BOOKED_MESSAGE: &str =
    "La hora seleccionada ya está reservada, por favor elige otra hora.";

/// Outcome of checking a proposed booking against a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConflictResult {
    PersonAlreadyBooked,
    TimeAlreadyBooked,
    NoConflict,
}

impl ConflictResult {
    pub fn is_conflict(&self) -> bool {
        !matches!(self, ConflictResult::NoConflict)
    }

    /// Rejection reason for the end user
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ConflictResult::PersonAlreadyBooked => Some(PERSON_ALREADY_BOOKED_MESSAGE),
            ConflictResult::TimeAlreadyBooked => Some(TIME_ALREADY_BOOKED_MESSAGE),
            ConflictResult::NoConflict => None,
        }
    }
}

/// Availability of one slot on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub label: String,
    pub time: String,
    pub taken: bool,
}

/// Whether `client_name` already has any appointment on `date`
pub fn is_person_booked(client_name: &str, date: &str, existing: &[Appointment]) -> bool {
    existing
        .iter()
        .any(|appointment| appointment.client_name == client_name && appointment.date == date)
}

/// Whether an appointment already occupies the normalized `time` on `date`
pub fn is_time_booked(time: &str, date: &str, existing: &[Appointment]) -> bool {
    existing
        .iter()
        .any(|appointment| appointment.time == time && appointment.date == date)
}

/// Evaluate a proposed booking. The per-client rule is checked before the per-slot rule.
pub fn check_conflict(
    proposed: &ProposedBooking<'_>,
    existing: &[Appointment],
) -> BookingResult<ConflictResult> {
    let time = normalize_time(proposed.time)?;

    if is_person_booked(proposed.client_name, proposed.date, existing) {
        return Ok(ConflictResult::PersonAlreadyBooked);
    }
    if is_time_booked(&time, proposed.date, existing) {
        return Ok(ConflictResult::TimeAlreadyBooked);
    }
    Ok(ConflictResult::NoConflict)
}

/// Whether the slot with this label is already taken on `date`
pub fn is_slot_taken(slot_label: &str, date: &str, existing: &[Appointment]) -> BookingResult<bool> {
    let time = normalize_time(slot_label)?;
    Ok(is_time_booked(&time, date, existing))
}

/// Availability of every fixed slot on `date`. Nothing is taken while no date is chosen.
pub fn slot_availability(date: &str, existing: &[Appointment]) -> BookingResult<Vec<SlotAvailability>> {
    time_slots()
        .iter()
        .map(|label| {
            let time = normalize_time(label)?;
            let taken = !date.is_empty() && is_time_booked(&time, date, existing);
            Ok(SlotAvailability {
                label: label.clone(),
                time,
                taken,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn appointment(client_name: &str, date: &str, time: &str) -> Appointment {
        Appointment {
            client_name: client_name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            ..Default::default()
        }
    }

    fn snapshot() -> Vec<Appointment> {
        vec![appointment("Ana", "2024-06-01", "09:00:00")]
    }

    #[test]
    fn test_other_client_same_slot_is_time_conflict() {
        let proposed = ProposedBooking::new("Luis", "2024-06-01", "9:00 AM");
        assert_eq!(
            check_conflict(&proposed, &snapshot()).unwrap(),
            ConflictResult::TimeAlreadyBooked
        );
    }

    #[test]
    fn test_same_client_same_day_is_person_conflict() {
        let proposed = ProposedBooking::new("Ana", "2024-06-01", "3:00 PM");
        assert_eq!(
            check_conflict(&proposed, &snapshot()).unwrap(),
            ConflictResult::PersonAlreadyBooked
        );
    }

    #[test]
    fn test_person_conflict_takes_precedence() {
        // Same client, same slot: both rules match
        let proposed = ProposedBooking::new("Ana", "2024-06-01", "9:00 AM");
        assert_eq!(
            check_conflict(&proposed, &snapshot()).unwrap(),
            ConflictResult::PersonAlreadyBooked
        );
    }

    #[test]
    fn test_other_day_has_no_conflict() {
        let proposed = ProposedBooking::new("Ana", "2024-06-02", "9:00 AM");
        assert_eq!(
            check_conflict(&proposed, &snapshot()).unwrap(),
            ConflictResult::NoConflict
        );
    }

    #[test]
    fn test_empty_snapshot_never_conflicts() {
        for label in time_slots() {
            let proposed = ProposedBooking::new("Luis", "2024-06-01", label);
            assert_eq!(check_conflict(&proposed, &[]).unwrap(), ConflictResult::NoConflict);
        }
    }

    #[test]
    fn test_client_names_match_exactly() {
        let proposed = ProposedBooking::new("ana", "2024-06-01", "10:00 AM");
        assert_eq!(
            check_conflict(&proposed, &snapshot()).unwrap(),
            ConflictResult::NoConflict
        );
    }

    #[test]
    fn test_invalid_label_is_error() {
        let proposed = ProposedBooking::new("Luis", "2024-06-01", "nine");
        assert!(matches!(
            check_conflict(&proposed, &snapshot()),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_snapshot_is_not_modified() {
        let existing = snapshot();
        let before = existing.clone();
        let proposed = ProposedBooking::new("Luis", "2024-06-01", "1:00 PM");
        check_conflict(&proposed, &existing).unwrap();
        assert_eq!(existing, before);
    }

    #[test]
    fn test_predicates() {
        let existing = snapshot();
        assert!(is_person_booked("Ana", "2024-06-01", &existing));
        assert!(!is_person_booked("Ana", "2024-06-02", &existing));
        assert!(is_time_booked("09:00:00", "2024-06-01", &existing));
        assert!(!is_time_booked("10:00:00", "2024-06-01", &existing));
    }

    #[test]
    fn test_is_slot_taken() {
        let existing = snapshot();
        assert!(is_slot_taken("9:00 AM", "2024-06-01", &existing).unwrap());
        assert!(!is_slot_taken("9:00 PM", "2024-06-01", &existing).unwrap());
        assert!(!is_slot_taken("9:00 AM", "2024-06-02", &existing).unwrap());
        assert!(is_slot_taken("bogus", "2024-06-01", &existing).is_err());
    }

    #[test]
    fn test_slot_availability() {
        let existing = vec![
            appointment("Ana", "2024-06-01", "09:00:00"),
            appointment("Luis", "2024-06-01", "13:00:00"),
            appointment("Eva", "2024-06-02", "10:00:00"),
        ];

        let slots = slot_availability("2024-06-01", &existing).unwrap();
        assert_eq!(slots.len(), 12);
        let taken: Vec<&str> = slots
            .iter()
            .filter(|slot| slot.taken)
            .map(|slot| slot.label.as_str())
            .collect();
        assert_eq!(taken, vec!["9:00 AM", "1:00 PM"]);
        assert_eq!(slots[4].time, "13:00:00");

        // No date chosen yet
        let slots = slot_availability("", &existing).unwrap();
        assert!(slots.iter().all(|slot| !slot.taken));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ConflictResult::PersonAlreadyBooked.message(),
            Some(PERSON_ALREADY_BOOKED_MESSAGE)
        );
        assert_eq!(
            ConflictResult::TimeAlreadyBooked.message(),
            Some(TIME_ALREADY_BOOKED_MESSAGE)
        );
        assert_eq!(ConflictResult::NoConflict.message(), None);
        assert!(!ConflictResult::NoConflict.is_conflict());
        assert!(ConflictResult::TimeAlreadyBooked.is_conflict());
    }
}
