use crate::{
    application::{
        dto::{TourDto, TourListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tour::TourRepository,
};
use std::sync::Arc;

pub struct TourQueryService {
    repo: Arc<dyn TourRepository>,
}

impl TourQueryService {
    pub fn new(repo: Arc<dyn TourRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_tours(&self) -> ApplicationResult<TourListDto> {
        let tours = self.repo.list().await?;
        Ok(tours.into())
    }

    pub async fn get_tour(&self, id: &str) -> ApplicationResult<TourDto> {
        let tour = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("No tour found with that ID"))?;
        Ok(tour.into())
    }
}
