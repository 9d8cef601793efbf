// src/application/commands/tours.rs
use crate::{
    application::{
        dto::TourDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tour::{NewTour, TourPatch, TourRepository},
};
use std::sync::Arc;

pub struct CreateTourCommand {
    pub tour: NewTour,
}

pub struct UpdateTourCommand {
    pub id: String,
    pub patch: TourPatch,
}

pub struct TourCommandService {
    repo: Arc<dyn TourRepository>,
}

impl TourCommandService {
    pub fn new(repo: Arc<dyn TourRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_tour(&self, command: CreateTourCommand) -> ApplicationResult<TourDto> {
        let created = self.repo.insert(command.tour).await?;
        tracing::info!(tour_id = %created.id, "tour created");
        Ok(created.into())
    }

    pub async fn update_tour(&self, command: UpdateTourCommand) -> ApplicationResult<TourDto> {
        if command.patch.is_empty() {
            return Err(ApplicationError::bad_request("No fields to update were provided").into());
        }

        let updated = self
            .repo
            .update(&command.id, command.patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("No tour found with that ID"))?;
        Ok(updated.into())
    }

    /// Missing tours are not checked here; the store reports them itself.
    pub async fn delete_tour(&self, id: &str) -> ApplicationResult<()> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(tour_id = %deleted.id, "tour deleted");
        Ok(())
    }
}
