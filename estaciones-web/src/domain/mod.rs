//! Domain types for weather-station records.
//!
//! A [`Station`] is what the backend returns; a [`StationDraft`] is what the
//! client writes. Identifiers are assigned by the backend and never change.

mod station;

pub use station::{InvalidStationId, Station, StationDraft, StationId};
