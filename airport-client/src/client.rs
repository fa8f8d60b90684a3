//! REST client for the airport service.
//!
//! Every operation is one GET, one decode. Any failure along the way, be it
//! an unreachable server, a non-2xx status or a body that doesn't decode,
//! is logged and comes back as an empty list.

use std::fmt;

use log::{debug, warn};

use crate::codec::{self, Entity, ParseError};
use crate::config::ClientConfig;
use crate::models::{Aircraft, Airport, Passenger};
use crate::transport::{HttpTransport, Transport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server returned error status: {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Parse(#[from] ParseError),
}

/// A queryable collection on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource {
    Passengers,
    Aircraft,
    Airports,
    AirportsByCity(i64),
    AirportsByAircraft(i64),
}

impl Resource {
    pub(crate) fn path(&self) -> &'static str {
        match self {
            Self::Passengers => "passengers",
            Self::Aircraft => "aircraft",
            Self::Airports | Self::AirportsByCity(_) | Self::AirportsByAircraft(_) => "airports",
        }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::AirportsByCity(id) => vec![("cityId", id.to_string())],
            Self::AirportsByAircraft(id) => vec![("aircraftId", id.to_string())],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passengers => write!(f, "passengers"),
            Self::Aircraft => write!(f, "aircraft"),
            Self::Airports => write!(f, "airports"),
            Self::AirportsByCity(id) => write!(f, "airports for city {id}"),
            Self::AirportsByAircraft(id) => write!(f, "airports for aircraft {id}"),
        }
    }
}

/// Client for the airport service.
///
/// Holds nothing but its transport, so a shared reference can serve any
/// number of concurrent calls.
pub struct RestClient<T = HttpTransport> {
    transport: T,
}

impl RestClient<HttpTransport> {
    /// Create a client for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_config(&ClientConfig::new(base_url))
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get_all_passengers(&self) -> Vec<Passenger> {
        self.list(Resource::Passengers).await
    }

    pub async fn get_all_aircraft(&self) -> Vec<Aircraft> {
        self.list(Resource::Aircraft).await
    }

    pub async fn get_all_airports(&self) -> Vec<Airport> {
        self.list(Resource::Airports).await
    }

    /// Airports located in the given city.
    pub async fn get_airports_by_city_id(&self, city_id: i64) -> Vec<Airport> {
        self.list(Resource::AirportsByCity(city_id)).await
    }

    /// Airports the given aircraft operates at.
    pub async fn get_airports_by_aircraft(&self, aircraft_id: i64) -> Vec<Airport> {
        self.list(Resource::AirportsByAircraft(aircraft_id)).await
    }

    async fn list<E: Entity>(&self, resource: Resource) -> Vec<E> {
        match self.fetch(resource).await {
            Ok(entities) => entities,
            Err(e) => {
                warn!("Could not get {resource}, returning an empty list: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch<E: Entity>(&self, resource: Resource) -> Result<Vec<E>, ClientError> {
        let response = self
            .transport
            .get(resource.path(), &resource.query())
            .await?;
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
            });
        }

        let entities = codec::parse_list::<E>(&response.body)?;
        debug!("Got {} {resource}", entities.len());
        Ok(entities)
    }
}
