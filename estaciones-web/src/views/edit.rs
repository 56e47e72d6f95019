//! Edit-station form.

use crate::client::{ClientError, StationRepository};
use crate::domain::{Station, StationDraft, StationId};

use super::SubmitOutcome;
use super::mask::mask_coordinate;
use super::nav::{Navigator, Route};
use super::validation::{DraftFields, Field, validate_edit};

pub const LOAD_FAILED: &str = "No se pudo cargar la información de la estación.";
pub const INVALID_DATA: &str = "Por favor verifica que todos los datos sean correctos.";
pub const UPDATE_FAILED: &str = "No se pudo actualizar la estación.";

/// Where the edit form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Waiting for the station to arrive.
    Loading,
    /// The station could not be loaded; nothing is editable.
    LoadError,
    /// Fields are populated and editable.
    Ready(DraftFields),
}

/// Form state for editing one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    id: StationId,
    state: EditState,
    error: Option<String>,
    submitting: bool,
}

impl EditForm {
    /// A form for `id` that has not loaded yet.
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            state: EditState::Loading,
            error: None,
            submitting: false,
        }
    }

    /// A ready form holding already-loaded text, e.g. a posted form.
    ///
    /// Coordinates pass through the same mask as typed input.
    pub fn with_fields(id: StationId, fields: DraftFields) -> Self {
        let mut form = Self::new(id);
        form.fill(&fields);
        form
    }

    fn fill(&mut self, fields: &DraftFields) {
        self.state = EditState::Ready(DraftFields::default());
        for field in Field::ALL {
            self.set_field(field, fields.get(field));
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Editable fields, present only once loaded.
    pub fn fields(&self) -> Option<&DraftFields> {
        match &self.state {
            EditState::Ready(fields) => Some(fields),
            EditState::Loading | EditState::LoadError => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetch the station and populate the fields, masking the coordinates.
    pub async fn load<R: StationRepository>(&mut self, repo: &R) {
        match repo.get_by_id(self.id).await {
            Ok(station) => self.fill(&DraftFields::from_station(&station)),
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "failed to load station");
                self.error = Some(LOAD_FAILED.to_string());
                self.state = EditState::LoadError;
            }
        }
    }

    /// Change one input. Ignored unless the form is ready.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if let EditState::Ready(fields) = &mut self.state {
            match field {
                Field::Latitude | Field::Longitude => fields.set(field, mask_coordinate(value)),
                _ => fields.set(field, value),
            }
        }
    }

    /// Validate and mark the form as in flight.
    pub fn begin_submit(&mut self) -> Result<StationDraft, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::InFlight);
        }
        let EditState::Ready(fields) = &self.state else {
            return Err(SubmitOutcome::NotReady);
        };
        self.error = None;

        match validate_edit(fields) {
            Ok(draft) => {
                self.submitting = true;
                Ok(draft)
            }
            Err(e) => {
                self.error = Some(INVALID_DATA.to_string());
                Err(SubmitOutcome::Invalid(e))
            }
        }
    }

    /// Apply the backend's answer to an update.
    pub fn finish_submit<N: Navigator>(
        &mut self,
        result: Result<Station, ClientError>,
        nav: &N,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(station) => {
                tracing::info!(id = %station.id(), "station updated");
                nav.go_to(Route::List);
                SubmitOutcome::Saved(station)
            }
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "update request failed");
                self.error = Some(UPDATE_FAILED.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, send one update request and apply its outcome.
    pub async fn submit<R: StationRepository, N: Navigator>(
        &mut self,
        repo: &R,
        nav: &N,
    ) -> SubmitOutcome {
        let draft = match self.begin_submit() {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };
        let result = repo.update(self.id, &draft).await;
        self.finish_submit(result, nav)
    }

    pub fn cancel<N: Navigator>(&self, nav: &N) {
        nav.back();
    }
}
