//! Domain entities handed to callers.
//!
//! These are plain values built fresh from each response. The JSON shapes they
//! are decoded from live in [`crate::codec`].

use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub name: String,
    /// State or province code, e.g. `NS`.
    pub state: String,
    pub population: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub id: i64,
    pub name: String,
    /// IATA-style code. Not validated.
    pub code: String,
    /// `None` when the server omits the city or sends `null`.
    pub city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    pub id: i64,
    pub tail_number: String,
    pub model: String,
}

/// Reference to a flight a passenger is booked on.
///
/// The element is kept as the server sent it, whatever its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRef(pub Value);

impl FlightRef {
    /// The flight id, for a bare integer or an object with an integer `id`.
    pub fn id(&self) -> Option<i64> {
        match &self.0 {
            Value::Object(fields) => fields.get("id").and_then(Value::as_i64),
            value => value.as_i64(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: i64,
    pub birthday: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// In the order the server listed them.
    pub flights: Vec<FlightRef>,
}

impl Passenger {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
