//! Read-only client for the airport REST service.
//!
//! [`RestClient`] fetches passengers, aircraft and airports and decodes them
//! into the types in [`models`]. A backend that is down, answers with an error
//! status or sends a body that doesn't decode yields an empty list rather
//! than an error.

pub mod client;
pub mod codec;
pub mod config;
mod convert;
pub mod models;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::RestClient;
pub use config::ClientConfig;
pub use models::{Aircraft, Airport, City, FlightRef, Passenger};
