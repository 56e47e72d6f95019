//! Station list view.

use crate::client::StationRepository;
use crate::domain::{Station, StationId};

use super::dialogs::Dialogs;

pub const CONFIRM_DELETE: &str =
    "¿Estás seguro de que deseas eliminar esta estación? Esta acción no se puede deshacer.";
pub const DELETE_REJECTED: &str = "Error al intentar eliminar en el servidor.";
pub const DELETE_UNREACHABLE: &str = "No se pudo conectar con el servidor.";

/// Where the list is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Station>),
}

/// Result of a delete request from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The backend deleted the station and its row was removed.
    Deleted,
    /// The backend answered with a failure status; the row stays.
    Rejected,
    /// The backend could not be reached; the row stays.
    Unreachable,
}

/// One rendered table row.
///
/// Absent date parts are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRow {
    pub id: StationId,
    pub name: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub latitude: String,
    pub longitude: String,
}

impl StationRow {
    pub fn from_station(station: &Station) -> Self {
        let part = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            id: station.id(),
            name: station.name.clone(),
            day: part(station.day),
            month: part(station.month),
            year: part(station.year),
            latitude: station.latitude.to_string(),
            longitude: station.longitude.to_string(),
        }
    }

    /// The date column, `dia/mes/anio`.
    pub fn date(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// The list of every station known to the backend.
///
/// A failed initial fetch is indistinguishable from an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    state: ListState,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Fetch every station. Errors are logged and leave the list empty.
    pub async fn load<R: StationRepository>(&mut self, repo: &R) {
        let stations = match repo.list_all().await {
            Ok(stations) => stations,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stations, showing empty list");
                Vec::new()
            }
        };
        self.state = ListState::Loaded(stations);
    }

    /// Loaded stations; empty while loading.
    pub fn stations(&self) -> &[Station] {
        match &self.state {
            ListState::Loading => &[],
            ListState::Loaded(stations) => stations,
        }
    }

    pub fn rows(&self) -> Vec<StationRow> {
        self.stations().iter().map(StationRow::from_station).collect()
    }

    /// Ask for confirmation, then delete a station.
    ///
    /// The row is dropped from local state only after the backend confirms.
    pub async fn delete<R: StationRepository, D: Dialogs>(
        &mut self,
        id: StationId,
        dialogs: &D,
        repo: &R,
    ) -> DeleteOutcome {
        if !dialogs.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Cancelled;
        }

        match repo.delete_by_id(id).await {
            Ok(true) => {
                if let ListState::Loaded(stations) = &mut self.state {
                    stations.retain(|s| s.id() != id);
                }
                tracing::info!(%id, "station deleted");
                DeleteOutcome::Deleted
            }
            Ok(false) => {
                dialogs.alert(DELETE_REJECTED);
                DeleteOutcome::Rejected
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "delete request failed");
                dialogs.alert(DELETE_UNREACHABLE);
                DeleteOutcome::Unreachable
            }
        }
    }
}
