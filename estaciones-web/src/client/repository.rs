//! The repository seam used by every view.

use std::future::Future;

use crate::domain::{Station, StationDraft, StationId};

use super::error::ClientError;

/// CRUD access to station records.
///
/// Each method issues exactly one backend request.
pub trait StationRepository: Send + Sync {
    /// `GET {base}`: every station, in backend order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Station>, ClientError>> + Send;

    /// `GET {base}/{id}`
    fn get_by_id(&self, id: StationId)
    -> impl Future<Output = Result<Station, ClientError>> + Send;

    /// `POST {base}`: the created station with its assigned id.
    fn create(
        &self,
        draft: &StationDraft,
    ) -> impl Future<Output = Result<Station, ClientError>> + Send;

    /// `PUT {base}/{id}`: the station as stored after the update.
    fn update(
        &self,
        id: StationId,
        draft: &StationDraft,
    ) -> impl Future<Output = Result<Station, ClientError>> + Send;

    /// `DELETE {base}/{id}`.
    ///
    /// `Ok(true)` on a success status, `Ok(false)` when the backend answered
    /// with any other status, `Err` when no answer was received.
    fn delete_by_id(&self, id: StationId) -> impl Future<Output = Result<bool, ClientError>> + Send;
}
