use crate::domain::tour::{Difficulty, Tour};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub id: String,
    pub name: String,
    pub duration: u32,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tour> for TourDto {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id.to_string(),
            name: tour.name,
            duration: tour.duration,
            max_group_size: tour.max_group_size,
            difficulty: tour.difficulty,
            ratings_average: tour.ratings_average,
            price: tour.price,
            price_discount: tour.price_discount,
            summary: tour.summary,
            created_at: tour.created_at,
            updated_at: tour.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourListDto {
    pub results: usize,
    pub tours: Vec<TourDto>,
}

impl From<Vec<Tour>> for TourListDto {
    fn from(tours: Vec<Tour>) -> Self {
        let tours: Vec<TourDto> = tours.into_iter().map(TourDto::from).collect();
        Self {
            results: tours.len(),
            tours,
        }
    }
}
