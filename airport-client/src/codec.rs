//! Wire records for (de)serialization and the list codec built on them.
//!
//! Every resource answers with a JSON array of objects. Decoding is all or
//! nothing: one bad element fails the whole body.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid date \"{value}\", expected YYYY-MM-DD")]
    Date { value: String },
}

/// A domain entity that has a JSON wire shape.
pub trait Entity: Sized {
    type Record: DeserializeOwned + Serialize;

    fn from_record(record: Self::Record) -> Result<Self, ParseError>;

    fn to_record(&self) -> Self::Record;
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct CityRecord {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub population: i64,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AirportRecord {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<CityRecord>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AircraftRecord {
    pub id: i64,
    #[serde(rename = "tailNumber")]
    pub tail_number: String,
    pub model: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct PassengerRecord {
    pub id: i64,
    pub birthday: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Missing and `null` both mean no flights.
    #[serde(default)]
    pub flights: Option<Vec<serde_json::Value>>,
}

/// Decode a JSON array body into entities, preserving order.
pub fn parse_list<E: Entity>(body: &str) -> Result<Vec<E>, ParseError> {
    let records: Vec<E::Record> = serde_json::from_str(body)?;
    records.into_iter().map(E::from_record).collect()
}

/// Encode entities back into their wire shape as a pretty-printed JSON array.
pub fn to_json<E: Entity>(entities: &[E]) -> Result<String, serde_json::Error> {
    let records: Vec<E::Record> = entities.iter().map(E::to_record).collect();
    serde_json::to_string_pretty(&records)
}
