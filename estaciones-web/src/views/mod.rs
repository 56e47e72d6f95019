//! View models for the station screens.
//!
//! Each view owns its state exclusively and reaches the outside world only
//! through injected capabilities: a [`StationRepository`] for data, a
//! [`Navigator`] for moving between routes and [`Dialogs`] for blocking
//! prompts. Nothing is shared between views; every view re-fetches on load.
//!
//! Forms guard against double submission with an in-flight flag. Submission
//! is split into `begin_submit` and `finish_submit` so the guard can be
//! observed between the two halves; `submit` runs both around one request.
//!
//! [`StationRepository`]: crate::client::StationRepository

use crate::domain::Station;

mod create;
mod dialogs;
mod edit;
mod list;
mod mask;
mod nav;
mod validation;

pub use create::CreateForm;
pub use dialogs::{Dialogs, ScriptedDialogs};
pub use edit::{EditForm, EditState};
pub use list::{DeleteOutcome, ListState, ListView, StationRow};
pub use mask::{COORDINATE_DECIMALS, mask_coordinate};
pub use nav::{Navigation, Navigator, RecordingNavigator, Route};
pub use validation::{DraftFields, Field, ValidationError, validate_create, validate_edit};

/// User-facing messages, in the language of the interface.
pub mod messages {
    pub use super::create::{INVALID_NUMBER, MISSING_REQUIRED, SAVE_FAILED};
    pub use super::edit::{INVALID_DATA, LOAD_FAILED, UPDATE_FAILED};
    pub use super::list::{CONFIRM_DELETE, DELETE_REJECTED, DELETE_UNREACHABLE};
}

/// What happened to a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend stored the station; the user was sent to the list.
    Saved(Station),
    /// Local validation failed; no request was sent.
    Invalid(ValidationError),
    /// The request failed; the draft is kept for another try.
    Failed,
    /// A previous submission is still in flight; no request was sent.
    InFlight,
    /// The form has nothing to submit (still loading or failed to load).
    NotReady,
}
