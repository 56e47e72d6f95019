//! In-memory station repository for development and tests.
//!
//! Behaves like the backend: ids are assigned on create in ascending order,
//! listing is ordered by id, and unknown ids answer 404.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Station, StationDraft, StationId};

use super::error::ClientError;
use super::repository::StationRepository;

/// How the mock answers while a failure is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Serve requests normally.
    #[default]
    None,
    /// Answer every request with this HTTP status.
    Status(u16),
    /// Behave as if the backend could not be reached.
    Unreachable,
}

/// Number of calls made to each repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallCounts {
    pub list_all: usize,
    pub get_by_id: usize,
    pub create: usize,
    pub update: usize,
    pub delete_by_id: usize,
}

impl CallCounts {
    /// Total number of requests that reached the repository.
    pub fn total(&self) -> usize {
        self.list_all + self.get_by_id + self.create + self.update + self.delete_by_id
    }
}

#[derive(Default)]
struct Counters {
    list_all: AtomicUsize,
    get_by_id: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete_by_id: AtomicUsize,
}

/// Mock repository that keeps stations in memory.
///
/// Clones share the same store, counters and failure mode.
#[derive(Clone)]
pub struct MockStationRepository {
    stations: Arc<RwLock<BTreeMap<StationId, Station>>>,
    next_id: Arc<AtomicU64>,
    failure: Arc<RwLock<FailureMode>>,
    counters: Arc<Counters>,
}

impl MockStationRepository {
    /// Create an empty repository. The first created station gets id 1.
    pub fn new() -> Self {
        Self::with_stations(Vec::new())
    }

    /// Create a repository holding the given stations.
    pub fn with_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        let map: BTreeMap<StationId, Station> =
            stations.into_iter().map(|s| (s.id(), s)).collect();
        let next_id = map.keys().next_back().map_or(1, |id| id.get() + 1);

        Self {
            stations: Arc::new(RwLock::new(map)),
            next_id: Arc::new(AtomicU64::new(next_id)),
            failure: Arc::new(RwLock::new(FailureMode::None)),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Load stations from a JSON file holding an array of station objects.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| ClientError::Api {
            status: 0,
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let stations: Vec<Station> =
            serde_json::from_str(&json).map_err(|e| ClientError::Json {
                message: format!("Failed to parse {:?}: {}", path, e),
            })?;

        Ok(Self::with_stations(stations))
    }

    /// Switch how subsequent requests are answered.
    pub async fn set_failure(&self, mode: FailureMode) {
        *self.failure.write().await = mode;
    }

    /// Snapshot of the calls made so far.
    pub fn calls(&self) -> CallCounts {
        CallCounts {
            list_all: self.counters.list_all.load(Ordering::SeqCst),
            get_by_id: self.counters.get_by_id.load(Ordering::SeqCst),
            create: self.counters.create.load(Ordering::SeqCst),
            update: self.counters.update.load(Ordering::SeqCst),
            delete_by_id: self.counters.delete_by_id.load(Ordering::SeqCst),
        }
    }

    /// Stored stations, ordered by id.
    pub async fn stations(&self) -> Vec<Station> {
        self.stations.read().await.values().cloned().collect()
    }

    /// Error for the current failure mode, if one is switched on.
    async fn injected_failure(&self) -> Option<ClientError> {
        match *self.failure.read().await {
            FailureMode::None => None,
            FailureMode::Status(status) => Some(ClientError::Api {
                status,
                message: format!("mock backend answered {status}"),
            }),
            FailureMode::Unreachable => Some(ClientError::Api {
                status: 0,
                message: "mock backend unreachable".to_string(),
            }),
        }
    }

    fn not_found(id: StationId) -> ClientError {
        ClientError::Api {
            status: 404,
            message: format!("No station with id {id}"),
        }
    }
}

impl Default for MockStationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StationRepository for MockStationRepository {
    async fn list_all(&self) -> Result<Vec<Station>, ClientError> {
        self.counters.list_all.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure().await {
            return Err(err);
        }
        Ok(self.stations().await)
    }

    async fn get_by_id(&self, id: StationId) -> Result<Station, ClientError> {
        self.counters.get_by_id.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure().await {
            return Err(err);
        }
        let stations = self.stations.read().await;
        stations.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &StationDraft) -> Result<Station, ClientError> {
        self.counters.create.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure().await {
            return Err(err);
        }
        let id = StationId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let station = Station::new(id, draft.clone());
        self.stations.write().await.insert(id, station.clone());
        Ok(station)
    }

    async fn update(&self, id: StationId, draft: &StationDraft) -> Result<Station, ClientError> {
        self.counters.update.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure().await {
            return Err(err);
        }
        let mut stations = self.stations.write().await;
        let slot = stations.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        *slot = Station::new(id, draft.clone());
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: StationId) -> Result<bool, ClientError> {
        self.counters.delete_by_id.fetch_add(1, Ordering::SeqCst);
        match *self.failure.read().await {
            FailureMode::None => {}
            FailureMode::Status(_) => return Ok(false),
            FailureMode::Unreachable => {
                return Err(ClientError::Api {
                    status: 0,
                    message: "mock backend unreachable".to_string(),
                });
            }
        }
        Ok(self.stations.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn draft(name: &str) -> StationDraft {
        StationDraft {
            name: name.to_string(),
            day: Some(1),
            month: Some(2),
            year: Some(2024),
            latitude: 6.2,
            longitude: -75.5,
        }
    }

    #[tokio::test]
    async fn create_assigns_ascending_ids() {
        let repo = MockStationRepository::new();

        let a = repo.create(&draft("A")).await.unwrap();
        let b = repo.create(&draft("B")).await.unwrap();

        assert_eq!(a.id(), StationId::new(1));
        assert_eq!(b.id(), StationId::new(2));
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeded_ids_continue_after_highest() {
        let repo = MockStationRepository::with_stations([Station::new(
            StationId::new(10),
            draft("Seed"),
        )]);

        let created = repo.create(&draft("New")).await.unwrap();
        assert_eq!(created.id(), StationId::new(11));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = MockStationRepository::new();

        let err = repo.get_by_id(StationId::new(3)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = repo.update(StationId::new(3), &draft("X")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        assert!(!repo.delete_by_id(StationId::new(3)).await.unwrap());
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let repo = MockStationRepository::new();
        let created = repo.create(&draft("Old")).await.unwrap();

        let mut changed = draft("New");
        changed.latitude = 1.5;
        let updated = repo.update(created.id(), &changed).await.unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name, "New");
        assert_eq!(updated.latitude, 1.5);
    }

    #[tokio::test]
    async fn failure_modes() {
        let repo = MockStationRepository::with_stations([Station::new(
            StationId::new(1),
            draft("A"),
        )]);

        repo.set_failure(FailureMode::Status(500)).await;
        assert_eq!(repo.list_all().await.unwrap_err().status(), Some(500));
        assert!(!repo.delete_by_id(StationId::new(1)).await.unwrap());

        repo.set_failure(FailureMode::Unreachable).await;
        assert!(repo.delete_by_id(StationId::new(1)).await.is_err());

        repo.set_failure(FailureMode::None).await;
        assert_eq!(repo.stations().await.len(), 1);
    }

    #[tokio::test]
    async fn counts_calls() {
        let repo = MockStationRepository::new();
        let _ = repo.list_all().await;
        let _ = repo.get_by_id(StationId::new(1)).await;
        let _ = repo.create(&draft("A")).await;

        let calls = repo.calls();
        assert_eq!(calls.list_all, 1);
        assert_eq!(calls.get_by_id, 1);
        assert_eq!(calls.create, 1);
        assert_eq!(calls.update, 0);
        assert_eq!(calls.total(), 3);
    }

    #[tokio::test]
    async fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":4,"nombre":"Torre SIATA","dia":12,"mes":5,"anio":2024,"latitud":6.259,"longitud":-75.591}}]"#
        )
        .unwrap();

        let repo = MockStationRepository::from_file(file.path()).unwrap();
        let stations = repo.list_all().await.unwrap();

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Torre SIATA");
    }

    #[test]
    fn bad_seed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            MockStationRepository::from_file(file.path()),
            Err(ClientError::Json { .. })
        ));
        assert!(MockStationRepository::from_file("/nonexistent/estaciones.json").is_err());
    }
}
