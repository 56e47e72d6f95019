//! `StationClient` against a fake backend speaking the stations REST API.

mod common;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use estaciones_web::client::{
    ClientError, MockStationRepository, StationClient, StationClientConfig, StationRepository,
};
use estaciones_web::domain::{StationDraft, StationId};
use estaciones_web::views::{EditForm, EditState};
use serde_json::Value;

use common::{closed_addr, spawn, station};

#[derive(Clone)]
struct Backend {
    repo: MockStationRepository,
    last_body: Arc<Mutex<Option<Value>>>,
}

fn error_status(e: &ClientError) -> StatusCode {
    e.status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn list(State(b): State<Backend>) -> Response {
    match b.repo.list_all().await {
        Ok(stations) => Json(stations).into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

async fn get_one(State(b): State<Backend>, Path(id): Path<u64>) -> Response {
    match b.repo.get_by_id(StationId::new(id)).await {
        Ok(station) => Json(station).into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

async fn create(State(b): State<Backend>, Json(body): Json<Value>) -> Response {
    *b.last_body.lock().unwrap() = Some(body.clone());
    let Ok(draft) = serde_json::from_value::<StationDraft>(body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match b.repo.create(&draft).await {
        Ok(station) => (StatusCode::CREATED, Json(station)).into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

async fn update(
    State(b): State<Backend>,
    Path(id): Path<u64>,
    Json(draft): Json<StationDraft>,
) -> Response {
    match b.repo.update(StationId::new(id), &draft).await {
        Ok(station) => Json(station).into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

async fn delete(State(b): State<Backend>, Path(id): Path<u64>) -> Response {
    match b.repo.delete_by_id(StationId::new(id)).await {
        Ok(true) => Json(serde_json::json!({"message": "Estación eliminada correctamente"}))
            .into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

async fn garbage() -> &'static str {
    "hola"
}

/// Start a backend seeded with `repo`; returns the collection URL.
async fn backend(repo: MockStationRepository) -> (String, Backend) {
    let state = Backend {
        repo,
        last_body: Arc::new(Mutex::new(None)),
    };
    let app = Router::new()
        .route("/api/estaciones", get(list).post(create))
        .route("/api/estaciones/:id", get(get_one).put(update).delete(delete))
        .route("/garbage", get(garbage))
        .with_state(state.clone());
    let addr = spawn(app).await;
    (format!("http://{addr}/api/estaciones"), state)
}

fn client(url: &str) -> StationClient {
    StationClient::new(StationClientConfig::new(url).with_timeout(5)).unwrap()
}

fn draft(name: &str) -> StationDraft {
    StationDraft {
        name: name.to_string(),
        day: None,
        month: Some(5),
        year: None,
        latitude: 0.0,
        longitude: -75.0,
    }
}

#[tokio::test]
async fn list_all_returns_backend_order() {
    let (url, _) = backend(MockStationRepository::with_stations([
        station(2, "B"),
        station(1, "Torre SIATA"),
    ]))
    .await;

    let stations = client(&url).list_all().await.unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].id(), StationId::new(1));
    assert_eq!(stations[0].name, "Torre SIATA");
    assert_eq!(stations[0].latitude, 6.259);
    assert_eq!(stations[1].id(), StationId::new(2));
}

#[tokio::test]
async fn get_by_id_not_found_is_api_error() {
    let (url, _) = backend(MockStationRepository::new()).await;

    let err = client(&url).get_by_id(StationId::new(3)).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn create_sends_every_field() {
    let (url, backend) = backend(MockStationRepository::new()).await;

    let created = client(&url).create(&draft("Norte")).await.unwrap();

    assert_eq!(created.id(), StationId::new(1));
    assert_eq!(created.name, "Norte");

    let body = backend.last_body.lock().unwrap().clone().unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 6);
    assert!(object["dia"].is_null());
    assert_eq!(object["mes"], 5);
    assert_eq!(object["latitud"], 0.0);
}

#[tokio::test]
async fn update_then_get_reflects_change() {
    let (url, _) = backend(MockStationRepository::with_stations([station(4, "Vieja")])).await;
    let client = client(&url);

    let updated = client.update(StationId::new(4), &draft("Nueva")).await.unwrap();
    assert_eq!(updated.id(), StationId::new(4));

    let fetched = client.get_by_id(StationId::new(4)).await.unwrap();
    assert_eq!(fetched.name, "Nueva");
    assert_eq!(fetched.day, None);
}

#[tokio::test]
async fn delete_reports_success_flag() {
    let (url, backend) = backend(MockStationRepository::with_stations([station(7, "B")])).await;
    let client = client(&url);

    assert!(client.delete_by_id(StationId::new(7)).await.unwrap());
    assert!(!client.delete_by_id(StationId::new(7)).await.unwrap());
    assert!(backend.repo.stations().await.is_empty());
}

#[tokio::test]
async fn trailing_slash_base_url() {
    let (url, _) = backend(MockStationRepository::with_stations([station(1, "A")])).await;

    let station = client(&format!("{url}/")).get_by_id(StationId::new(1)).await.unwrap();

    assert_eq!(station.name, "A");
}

#[tokio::test]
async fn unparsable_body_is_json_error() {
    let (url, _) = backend(MockStationRepository::new()).await;
    let garbage_url = url.replace("/api/estaciones", "/garbage");

    let err = client(&garbage_url).list_all().await.unwrap_err();

    match err {
        ClientError::Json { message } => assert!(message.contains("hola")),
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_http_error() {
    let addr = closed_addr().await;
    let client = client(&format!("http://{addr}/api/estaciones"));

    assert!(matches!(client.list_all().await, Err(ClientError::Http(_))));
    assert!(matches!(
        client.delete_by_id(StationId::new(1)).await,
        Err(ClientError::Http(_))
    ));
}

#[tokio::test]
async fn edit_form_over_http_enters_load_error_on_404() {
    let (url, _) = backend(MockStationRepository::new()).await;
    let mut form = EditForm::new(StationId::new(3));

    form.load(&client(&url)).await;

    assert_eq!(form.state(), &EditState::LoadError);
    assert!(form.fields().is_none());
}
