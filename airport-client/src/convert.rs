//! Mapping between wire records and domain entities.

use chrono::NaiveDate;

use crate::codec::{
    AircraftRecord, AirportRecord, CityRecord, Entity, ParseError, PassengerRecord, DATE_FORMAT,
};
use crate::models::{Aircraft, Airport, City, FlightRef, Passenger};

/// Parse a `YYYY-MM-DD` date. Unpadded fields are rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::Date {
        value: value.to_string(),
    };
    // chrono tolerates signs, blanks and short fields, the wire format doesn't
    if !is_date_shaped(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `dddd-dd-dd` in ASCII digits.
fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            state: record.state,
            population: record.population,
        }
    }
}

impl From<&City> for CityRecord {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            state: city.state.clone(),
            population: city.population,
        }
    }
}

impl Entity for Airport {
    type Record = AirportRecord;

    fn from_record(record: AirportRecord) -> Result<Self, ParseError> {
        Ok(Self {
            id: record.id,
            name: record.name,
            code: record.code,
            city: record.city.map(City::from),
        })
    }

    fn to_record(&self) -> AirportRecord {
        AirportRecord {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            city: self.city.as_ref().map(CityRecord::from),
        }
    }
}

impl Entity for Aircraft {
    type Record = AircraftRecord;

    fn from_record(record: AircraftRecord) -> Result<Self, ParseError> {
        Ok(Self {
            id: record.id,
            tail_number: record.tail_number,
            model: record.model,
        })
    }

    fn to_record(&self) -> AircraftRecord {
        AircraftRecord {
            id: self.id,
            tail_number: self.tail_number.clone(),
            model: self.model.clone(),
        }
    }
}

impl Entity for Passenger {
    type Record = PassengerRecord;

    fn from_record(record: PassengerRecord) -> Result<Self, ParseError> {
        Ok(Self {
            id: record.id,
            birthday: parse_date(&record.birthday)?,
            first_name: record.first_name,
            last_name: record.last_name,
            phone_number: record.phone_number,
            flights: record
                .flights
                .unwrap_or_default()
                .into_iter()
                .map(FlightRef)
                .collect(),
        })
    }

    fn to_record(&self) -> PassengerRecord {
        PassengerRecord {
            id: self.id,
            birthday: self.birthday.format(DATE_FORMAT).to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            flights: Some(self.flights.iter().map(|flight| flight.0.clone()).collect()),
        }
    }
}
