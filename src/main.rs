use cita::booking::{check_conflict, slot_availability, ProposedBooking};
use cita::booking::validation::parse_date;
use cita::startup;
use cita::utils::snapshot::{load_appointments, load_services};
use std::env;
use tracing::info;

const USAGE: &str = "usage: cita <YYYY-MM-DD> [<client name> <time label>]";

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (date, proposal) = match args.as_slice() {
        [date] => (date, None),
        [date, client_name, label] => (date, Some((client_name, label))),
        _ => return Err(miette::miette!("{}", USAGE)),
    };
    parse_date(date)?;

    let config = startup::load_config()?;
    let existing = load_appointments(&config.snapshot_path)?;
    info!(
        "Loaded {} appointments from {}",
        existing.len(),
        config.snapshot_path.display()
    );

    if let Some(path) = &config.services_path {
        let services = load_services(path)?;
        let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
        println!("Servicios: {}", names.join(", "));
    }

    println!("{}", date);
    for slot in slot_availability(date, &existing)? {
        let status = if slot.taken { "reservada" } else { "disponible" };
        println!("  {:>8}  {}", slot.label, status);
    }

    if let Some((client_name, label)) = proposal {
        let result = check_conflict(&ProposedBooking::new(client_name, date, label), &existing)?;
        match result.message() {
            Some(message) => println!("{}", message),
            None => println!("{} a las {} esta disponible para {}", date, label, client_name),
        }
    }

    Ok(())
}
