// src/domain/tour/entity.rs
use crate::domain::tour::value_objects::{Difficulty, TourId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: TourId,
    pub name: String,
    pub duration: u32,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub price: f64,
    pub price_discount: Option<f64>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate document submitted for insertion. Every field is optional so the
/// store's validators, not the request decoder, decide what is missing.
#[derive(Debug, Clone, Default)]
pub struct NewTour {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub max_group_size: Option<i64>,
    pub difficulty: Option<String>,
    pub ratings_average: Option<f64>,
    pub price: Option<f64>,
    pub price_discount: Option<f64>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TourPatch {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub max_group_size: Option<i64>,
    pub difficulty: Option<String>,
    pub ratings_average: Option<f64>,
    pub price: Option<f64>,
    pub price_discount: Option<f64>,
    pub summary: Option<String>,
}

impl TourPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.duration.is_none()
            && self.max_group_size.is_none()
            && self.difficulty.is_none()
            && self.ratings_average.is_none()
            && self.price.is_none()
            && self.price_discount.is_none()
            && self.summary.is_none()
    }

    /// Overlay the patch on an existing tour, producing a candidate that has
    /// to pass validation again before it replaces the stored document.
    pub fn apply_to(self, tour: &Tour) -> NewTour {
        NewTour {
            name: self.name.or_else(|| Some(tour.name.clone())),
            duration: self.duration.or(Some(i64::from(tour.duration))),
            max_group_size: self.max_group_size.or(Some(i64::from(tour.max_group_size))),
            difficulty: self
                .difficulty
                .or_else(|| Some(tour.difficulty.as_str().to_string())),
            ratings_average: self.ratings_average.or(Some(tour.ratings_average)),
            price: self.price.or(Some(tour.price)),
            price_discount: self.price_discount.or(tour.price_discount),
            summary: self.summary.or_else(|| tour.summary.clone()),
        }
    }
}
