pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, Endpoint, RequestOptions};

use serde::{Deserialize, Serialize};

/// Identifier of a supported city, e.g. `almaty`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct CityId(pub String);

impl From<&str> for CityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct SpaceObjectId(pub i64);

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ClaimId(pub String);

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct FireId(pub String);

/// A point on the globe in decimal degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::Display,
)]
#[display("{latitude},{longitude}")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Selects which place a dashboard request is about.
///
/// The backend accepts either a named city or a raw coordinate pair; the
/// two are encoded as `city_id=<id>` and `lat=<lat>&lon=<lon>` respectively.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum Location {
    #[display("{_0}")]
    City(CityId),
    #[display("{_0}")]
    Coordinates(Coordinates),
}

impl Location {
    pub fn city(id: impl Into<String>) -> Self {
        Self::City(CityId(id.into()))
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates(Coordinates::new(latitude, longitude))
    }

    /// Query parameters identifying this location.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City(id) => vec![("city_id", id.0.clone())],
            Self::Coordinates(coords) => vec![
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ],
        }
    }
}

impl From<CityId> for Location {
    fn from(value: CityId) -> Self {
        Self::City(value)
    }
}

impl From<Coordinates> for Location {
    fn from(value: Coordinates) -> Self {
        Self::Coordinates(value)
    }
}
