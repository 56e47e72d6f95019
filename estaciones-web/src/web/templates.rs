//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::StationId;
use crate::views::{CreateForm, DraftFields, EditForm, ListView, Route, StationRow};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Station table.
#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub rows: Vec<StationRow>,
    pub alerts: Vec<String>,
    /// Path the browser should show instead of the one that was posted.
    pub location: Option<String>,
}

impl ListTemplate {
    pub fn from_view(view: &ListView, alerts: Vec<String>) -> Self {
        Self {
            rows: view.rows(),
            alerts,
            location: None,
        }
    }

    pub fn with_location(mut self, route: Route) -> Self {
        self.location = Some(route.path());
        self
    }
}

/// New-station form.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub fields: DraftFields,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CreateTemplate {
    pub fn from_form(form: &CreateForm) -> Self {
        Self {
            fields: form.fields().clone(),
            error: form.error().map(str::to_string),
            submitting: form.is_submitting(),
        }
    }
}

/// Edit form; without fields only the error is shown.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub id: StationId,
    pub fields: Option<DraftFields>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl EditTemplate {
    pub fn from_form(form: &EditForm) -> Self {
        Self {
            id: form.id(),
            fields: form.fields().cloned(),
            error: form.error().map(str::to_string),
            submitting: form.is_submitting(),
        }
    }
}

/// Delete confirmation prompt.
#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub id: StationId,
    pub name: Option<String>,
    pub question: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
