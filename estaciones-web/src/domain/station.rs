//! Station record types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: must be an unsigned integer")]
pub struct InvalidStationId {
    input: String,
}

/// Backend-assigned station identifier.
///
/// # Examples
///
/// ```
/// use estaciones_web::domain::StationId;
///
/// let id = StationId::parse("7").unwrap();
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
///
/// assert!(StationId::parse("siete").is_err());
/// assert!(StationId::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse an id from a path segment.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        s.parse::<u64>().map(Self).map_err(|_| InvalidStationId {
            input: s.to_string(),
        })
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weather station as stored by the backend.
///
/// The id is fixed at construction; the remaining fields mirror the JSON
/// body `{id, nombre, dia, mes, anio, latitud, longitud}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "dia", default)]
    pub day: Option<u32>,
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio", default)]
    pub year: Option<u32>,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
}

impl Station {
    /// Build a persisted station from the id the backend assigned and the
    /// fields that were written.
    pub fn new(id: StationId, draft: StationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            day: draft.day,
            month: draft.month,
            year: draft.year,
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }
}

/// The body of a create or update request.
///
/// All six fields are always serialized; absent date parts go out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "dia")]
    pub day: Option<u32>,
    #[serde(rename = "mes")]
    pub month: Option<u32>,
    #[serde(rename = "anio")]
    pub year: Option<u32>,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
}

impl From<&Station> for StationDraft {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            day: station.day,
            month: station.month,
            year: station.year,
            latitude: station.latitude,
            longitude: station.longitude,
        }
    }
}
