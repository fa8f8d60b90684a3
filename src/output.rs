//! Plain text rendering, one line per entity.

use airport_client::{Aircraft, Airport, Passenger};

pub fn passengers(passengers: &[Passenger]) {
    if passengers.is_empty() {
        println!("No passengers found.");
        return;
    }
    for p in passengers {
        println!(
            "{:>5}  {:<30} born {}  {}  {} flight(s)",
            p.id,
            p.full_name(),
            p.birthday,
            p.phone_number,
            p.flights.len()
        );
    }
}

pub fn aircraft(aircraft: &[Aircraft]) {
    if aircraft.is_empty() {
        println!("No aircraft found.");
        return;
    }
    for a in aircraft {
        println!("{:>5}  {:<10} {}", a.id, a.tail_number, a.model);
    }
}

pub fn airports(airports: &[Airport]) {
    if airports.is_empty() {
        println!("No airports found.");
        return;
    }
    for a in airports {
        let city = match &a.city {
            Some(city) => format!("{}, {}", city.name, city.state),
            None => "unknown city".to_string(),
        };
        println!("{:>5}  {}  {} ({})", a.id, a.code, a.name, city);
    }
}
