//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::client::StationRepository;
use crate::domain::StationId;
use crate::views::{
    CreateForm, DeleteOutcome, DraftFields, EditForm, ListView, Navigation, RecordingNavigator,
    Route, ScriptedDialogs, SubmitOutcome, messages,
};

use super::dto::DeleteConfirmation;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<R: StationRepository + 'static>(
    state: AppState<R>,
    static_dir: &str,
) -> Router {
    Router::new()
        .route("/", get(list_page::<R>))
        .route("/agregar", get(create_page).post(create_submit::<R>))
        .route("/editar/:id", get(edit_page::<R>).post(edit_submit::<R>))
        .route(
            "/eliminar/:id",
            get(confirm_delete_page::<R>).post(delete_submit::<R>),
        )
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Station list, rendered once loaded.
async fn list_page<R: StationRepository>(
    State(state): State<AppState<R>>,
) -> Result<Html<String>, AppError> {
    let mut view = ListView::new();
    view.load(state.repo.as_ref()).await;
    render(&ListTemplate::from_view(&view, Vec::new()))
}

/// Empty create form.
async fn create_page() -> Result<Html<String>, AppError> {
    render(&CreateTemplate::from_form(&CreateForm::new()))
}

async fn create_submit<R: StationRepository>(
    State(state): State<AppState<R>>,
    Form(fields): Form<DraftFields>,
) -> Result<Response, AppError> {
    let mut form = CreateForm::with_fields(fields);
    let nav = RecordingNavigator::new();

    let outcome = form.submit(state.repo.as_ref(), &nav).await;

    if let Some(navigation) = nav.last() {
        return Ok(redirect(navigation));
    }
    let html = render(&CreateTemplate::from_form(&form))?;
    Ok((outcome_status(&outcome), html).into_response())
}

/// Edit form for one station, or the load error.
async fn edit_page<R: StationRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let mut form = EditForm::new(id);
    form.load(state.repo.as_ref()).await;

    let status = if form.fields().is_some() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    let html = render(&EditTemplate::from_form(&form))?;
    Ok((status, html).into_response())
}

async fn edit_submit<R: StationRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Form(fields): Form<DraftFields>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let mut form = EditForm::with_fields(id, fields);
    let nav = RecordingNavigator::new();

    let outcome = form.submit(state.repo.as_ref(), &nav).await;

    if let Some(navigation) = nav.last() {
        return Ok(redirect(navigation));
    }
    let html = render(&EditTemplate::from_form(&form))?;
    Ok((outcome_status(&outcome), html).into_response())
}

/// The confirmation prompt shown before a delete.
async fn confirm_delete_page<R: StationRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;

    // The name is only decoration; the prompt works without it.
    let name = match state.repo.get_by_id(id).await {
        Ok(station) => Some(station.name),
        Err(e) => {
            tracing::warn!(%id, error = %e, "could not fetch station for delete prompt");
            None
        }
    };

    render(&ConfirmDeleteTemplate {
        id,
        name,
        question: messages::CONFIRM_DELETE.to_string(),
    })
}

/// Delete after the prompt was answered, then show the list from local state.
///
/// The page is marked as standing for `/` so the browser does not keep the
/// POST location.
async fn delete_submit<R: StationRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Form(answer): Form<DeleteConfirmation>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let dialogs = ScriptedDialogs::answering(answer.is_confirmed());

    let mut view = ListView::new();
    view.load(state.repo.as_ref()).await;
    let outcome = view.delete(id, &dialogs, state.repo.as_ref()).await;

    let status = match outcome {
        DeleteOutcome::Cancelled => return Ok(redirect(Navigation::GoTo(Route::List))),
        DeleteOutcome::Deleted => StatusCode::OK,
        DeleteOutcome::Rejected | DeleteOutcome::Unreachable => StatusCode::BAD_GATEWAY,
    };
    // Refreshing must not post the delete again.
    let page = ListTemplate::from_view(&view, dialogs.alerts()).with_location(Route::List);
    let html = render(&page)?;
    Ok((status, [(header::CONTENT_LOCATION, Route::List.path())], html).into_response())
}

fn parse_id(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Turn a view's navigation request into a See Other redirect.
fn redirect(navigation: Navigation) -> Response {
    match navigation {
        Navigation::GoTo(route) => Redirect::to(&route.path()).into_response(),
        // Without client history the list is the only safe place to go back to.
        Navigation::Back => Redirect::to(&Route::List.path()).into_response(),
    }
}

/// Status for a form that is rendered again instead of redirecting.
fn outcome_status(outcome: &SubmitOutcome) -> StatusCode {
    match outcome {
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed | SubmitOutcome::NotReady => StatusCode::BAD_GATEWAY,
        SubmitOutcome::Saved(_) | SubmitOutcome::InFlight => StatusCode::OK,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "Solicitud inválida", message)
            }
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno", message)
            }
        };

        tracing::warn!(%status, %message, "request failed");

        let page = ErrorTemplate {
            title: title.to_string(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, page.message).into_response(),
        }
    }
}
