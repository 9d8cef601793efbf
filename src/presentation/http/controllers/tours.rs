// src/presentation/http/controllers/tours.rs
use crate::application::{
    commands::{CreateTourCommand, UpdateTourCommand},
    dto::{TourDto, TourListDto},
};
use crate::domain::tour::{NewTour, TourPatch};
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

/// Body accepted by both create and update. Required fields are enforced by
/// the store so that a missing field is reported alongside the other field
/// errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPayload {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub max_group_size: Option<i64>,
    pub difficulty: Option<String>,
    pub ratings_average: Option<f64>,
    pub price: Option<f64>,
    pub price_discount: Option<f64>,
    pub summary: Option<String>,
}

impl From<TourPayload> for NewTour {
    fn from(p: TourPayload) -> Self {
        Self {
            name: p.name,
            duration: p.duration,
            max_group_size: p.max_group_size,
            difficulty: p.difficulty,
            ratings_average: p.ratings_average,
            price: p.price,
            price_discount: p.price_discount,
            summary: p.summary,
        }
    }
}

impl From<TourPayload> for TourPatch {
    fn from(p: TourPayload) -> Self {
        Self {
            name: p.name,
            duration: p.duration,
            max_group_size: p.max_group_size,
            difficulty: p.difficulty,
            ratings_average: p.ratings_average,
            price: p.price,
            price_discount: p.price_discount,
            summary: p.summary,
        }
    }
}

pub async fn list_tours(Extension(state): Extension<HttpState>) -> HttpResult<Json<TourListDto>> {
    let tours = state.services.tour_queries.list_tours().await?;
    Ok(Json(tours))
}

pub async fn create_tour(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<TourPayload>,
) -> HttpResult<(StatusCode, Json<TourDto>)> {
    let command = CreateTourCommand {
        tour: payload.into(),
    };
    let created = state.services.tour_commands.create_tour(command).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_tour(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<String>,
) -> HttpResult<Json<TourDto>> {
    state.services.tour_queries.get_tour(&id).await.map(Json)
}

pub async fn update_tour(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<String>,
    JsonBody(payload): JsonBody<TourPayload>,
) -> HttpResult<Json<TourDto>> {
    let command = UpdateTourCommand {
        id,
        patch: payload.into(),
    };
    let updated = state.services.tour_commands.update_tour(command).await?;
    Ok(Json(updated))
}

pub async fn delete_tour(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<String>,
) -> HttpResult<StatusCode> {
    state.services.tour_commands.delete_tour(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
