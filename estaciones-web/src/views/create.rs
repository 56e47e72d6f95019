//! Create-station form.

use crate::client::{ClientError, StationRepository};
use crate::domain::{Station, StationDraft};

use super::SubmitOutcome;
use super::nav::{Navigator, Route};
use super::validation::{DraftFields, Field, ValidationError, validate_create};

pub const MISSING_REQUIRED: &str = "Por favor completa los campos obligatorios.";
pub const INVALID_NUMBER: &str = "Por favor verifica que todos los datos sean correctos.";
pub const SAVE_FAILED: &str = "Ocurrió un error al guardar la estación.";

/// Form state for a new station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    fields: DraftFields,
    error: Option<String>,
    submitting: bool,
}

impl CreateForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with submitted text.
    pub fn with_fields(fields: DraftFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &DraftFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Inline error shown above the form.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a create request is in flight; the submit control is
    /// disabled meanwhile.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and mark the form as in flight.
    ///
    /// Returns the draft to send, or why nothing may be sent.
    pub fn begin_submit(&mut self) -> Result<StationDraft, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::InFlight);
        }
        self.error = None;

        let draft = validate_create(&self.fields).map_err(|e| {
            self.error = Some(
                match e {
                    ValidationError::Missing(_) => MISSING_REQUIRED,
                    ValidationError::Invalid(_) | ValidationError::Zero(_) => INVALID_NUMBER,
                }
                .to_string(),
            );
            SubmitOutcome::Invalid(e)
        })?;

        self.submitting = true;
        Ok(draft)
    }

    /// Apply the backend's answer to a submission started with
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// On success the user is sent to the list; on failure the draft is kept.
    pub fn finish_submit<N: Navigator>(
        &mut self,
        result: Result<Station, ClientError>,
        nav: &N,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(station) => {
                tracing::info!(id = %station.id(), name = %station.name, "station created");
                nav.go_to(Route::List);
                SubmitOutcome::Saved(station)
            }
            Err(e) => {
                tracing::warn!(error = %e, "create request failed");
                self.error = Some(SAVE_FAILED.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, send one create request and apply its outcome.
    pub async fn submit<R: StationRepository, N: Navigator>(
        &mut self,
        repo: &R,
        nav: &N,
    ) -> SubmitOutcome {
        let draft = match self.begin_submit() {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };
        let result = repo.create(&draft).await;
        self.finish_submit(result, nav)
    }

    pub fn cancel<N: Navigator>(&self, nav: &N) {
        nav.go_to(Route::List);
    }
}
