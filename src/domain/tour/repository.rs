use crate::domain::errors::StoreResult;
use crate::domain::tour::entity::{NewTour, Tour, TourPatch};
use async_trait::async_trait;

/// Persistence collaborator for tours.
///
/// Identifiers are passed through as raw strings; parsing them is the store's
/// job, and a malformed identifier surfaces as a `CastError` shaped failure.
#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn insert(&self, tour: NewTour) -> StoreResult<Tour>;
    async fn list(&self) -> StoreResult<Vec<Tour>>;
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Tour>>;
    async fn update(&self, id: &str, patch: TourPatch) -> StoreResult<Option<Tour>>;
    /// Delete or fail: a missing document is reported as `DocumentNotFoundError`.
    async fn delete(&self, id: &str) -> StoreResult<Tour>;
}
