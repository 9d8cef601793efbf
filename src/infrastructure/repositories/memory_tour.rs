// src/infrastructure/repositories/memory_tour.rs
use crate::application::ports::time::Clock;
use crate::domain::errors::{FieldFailure, RawError, StoreResult};
use crate::domain::tour::{Difficulty, NewTour, Tour, TourId, TourPatch, TourRepository};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const MODEL: &str = "Tour";
const COLLECTION: &str = "tours";
const NAME_MIN_LEN: usize = 10;
const NAME_MAX_LEN: usize = 40;
const DEFAULT_RATINGS_AVERAGE: f64 = 4.5;

/// Document store for tours held in process memory.
///
/// Behaves like a schema-validated document database: candidates are
/// validated on every write, `name` carries a unique index, and identifiers
/// are parsed by the store itself.
pub struct InMemoryTourRepository {
    docs: RwLock<Vec<Tour>>,
    clock: Arc<dyn Clock>,
}

struct ValidTour {
    name: String,
    duration: u32,
    max_group_size: u32,
    difficulty: Difficulty,
    ratings_average: f64,
    price: f64,
    price_discount: Option<f64>,
    summary: Option<String>,
}

impl InMemoryTourRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            clock,
        }
    }

    fn parse_id(id: &str) -> StoreResult<TourId> {
        id.parse::<TourId>()
            .map_err(|_| RawError::cast(MODEL, "id", id))
    }

    fn ensure_unique_name(docs: &[Tour], name: &str, except: Option<TourId>) -> StoreResult<()> {
        let taken = docs
            .iter()
            .any(|doc| doc.name == name && Some(doc.id) != except);
        if taken {
            let mut key_value = Map::new();
            key_value.insert("name".into(), Value::String(name.to_string()));
            return Err(RawError::duplicate_key(COLLECTION, key_value));
        }
        Ok(())
    }
}

fn required(errors: &mut BTreeMap<String, FieldFailure>, path: &str, message: &str) {
    errors.insert(path.into(), FieldFailure::new(path, "required", message));
}

fn invalid(errors: &mut BTreeMap<String, FieldFailure>, path: &str, kind: &str, message: String) {
    errors.insert(path.into(), FieldFailure::new(path, kind, message));
}

fn positive_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}

fn validate(candidate: NewTour) -> StoreResult<ValidTour> {
    let mut errors = BTreeMap::new();

    let name = candidate
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    match &name {
        None => required(&mut errors, "name", "A tour must have a name"),
        Some(n) if n.chars().count() > NAME_MAX_LEN => invalid(
            &mut errors,
            "name",
            "maxlength",
            format!("A tour name must have at most {NAME_MAX_LEN} characters"),
        ),
        Some(n) if n.chars().count() < NAME_MIN_LEN => invalid(
            &mut errors,
            "name",
            "minlength",
            format!("A tour name must have at least {NAME_MIN_LEN} characters"),
        ),
        Some(_) => {}
    }

    let duration = match candidate.duration {
        None => {
            required(&mut errors, "duration", "A tour must have a duration");
            None
        }
        Some(value) => {
            let parsed = positive_u32(value);
            if parsed.is_none() {
                invalid(
                    &mut errors,
                    "duration",
                    "min",
                    "Duration must be a positive number of days".into(),
                );
            }
            parsed
        }
    };

    let max_group_size = match candidate.max_group_size {
        None => {
            required(&mut errors, "maxGroupSize", "A tour must have a group size");
            None
        }
        Some(value) => {
            let parsed = positive_u32(value);
            if parsed.is_none() {
                invalid(
                    &mut errors,
                    "maxGroupSize",
                    "min",
                    "Group size must be a positive number".into(),
                );
            }
            parsed
        }
    };

    let difficulty = match candidate.difficulty.as_deref() {
        None => {
            required(&mut errors, "difficulty", "A tour must have a difficulty");
            None
        }
        Some(value) => {
            let parsed = value.parse::<Difficulty>().ok();
            if parsed.is_none() {
                invalid(
                    &mut errors,
                    "difficulty",
                    "enum",
                    "Difficulty is either: easy, medium, difficult".into(),
                );
            }
            parsed
        }
    };

    let ratings_average = candidate.ratings_average.unwrap_or(DEFAULT_RATINGS_AVERAGE);
    if !(1.0..=5.0).contains(&ratings_average) {
        invalid(
            &mut errors,
            "ratingsAverage",
            "range",
            "Rating must be between 1.0 and 5.0".into(),
        );
    }

    let price = match candidate.price {
        None => {
            required(&mut errors, "price", "A tour must have a price");
            None
        }
        Some(value) if value <= 0.0 => {
            invalid(&mut errors, "price", "min", "Price must be a positive number".into());
            None
        }
        Some(value) => Some(value),
    };

    if let (Some(discount), Some(price)) = (candidate.price_discount, price)
        && discount >= price
    {
        invalid(
            &mut errors,
            "priceDiscount",
            "user defined",
            format!("Discount price ({discount}) should be below regular price"),
        );
    }

    match (name, duration, max_group_size, difficulty, price) {
        (Some(name), Some(duration), Some(max_group_size), Some(difficulty), Some(price))
            if errors.is_empty() =>
        {
            Ok(ValidTour {
                name,
                duration,
                max_group_size,
                difficulty,
                ratings_average,
                price,
                price_discount: candidate.price_discount,
                summary: candidate.summary.map(|s| s.trim().to_string()),
            })
        }
        _ => Err(RawError::validation(MODEL, errors)),
    }
}

#[async_trait]
impl TourRepository for InMemoryTourRepository {
    async fn insert(&self, tour: NewTour) -> StoreResult<Tour> {
        tokio::task::yield_now().await;
        let valid = validate(tour)?;

        let mut docs = self.docs.write().await;
        Self::ensure_unique_name(&docs, &valid.name, None)?;

        let now = self.clock.now();
        let created = Tour {
            id: TourId::generate(),
            name: valid.name,
            duration: valid.duration,
            max_group_size: valid.max_group_size,
            difficulty: valid.difficulty,
            ratings_average: valid.ratings_average,
            price: valid.price,
            price_discount: valid.price_discount,
            summary: valid.summary,
            created_at: now,
            updated_at: now,
        };
        docs.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> StoreResult<Vec<Tour>> {
        tokio::task::yield_now().await;
        Ok(self.docs.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Tour>> {
        let id = Self::parse_id(id)?;
        tokio::task::yield_now().await;
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|doc| doc.id == id).cloned())
    }

    async fn update(&self, id: &str, patch: TourPatch) -> StoreResult<Option<Tour>> {
        let id = Self::parse_id(id)?;
        tokio::task::yield_now().await;

        let mut docs = self.docs.write().await;
        let Some(index) = docs.iter().position(|doc| doc.id == id) else {
            return Ok(None);
        };

        let valid = validate(patch.apply_to(&docs[index]))?;
        Self::ensure_unique_name(&docs, &valid.name, Some(id))?;

        let now = self.clock.now();
        let doc = &mut docs[index];
        doc.name = valid.name;
        doc.duration = valid.duration;
        doc.max_group_size = valid.max_group_size;
        doc.difficulty = valid.difficulty;
        doc.ratings_average = valid.ratings_average;
        doc.price = valid.price;
        doc.price_discount = valid.price_discount;
        doc.summary = valid.summary;
        doc.updated_at = now;
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<Tour> {
        let parsed = Self::parse_id(id)?;
        tokio::task::yield_now().await;

        let mut docs = self.docs.write().await;
        let index = docs
            .iter()
            .position(|doc| doc.id == parsed)
            .ok_or_else(|| RawError::document_not_found(MODEL, id))?;
        Ok(docs.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{
        CAST_ERROR, DOCUMENT_NOT_FOUND_ERROR, DUPLICATE_KEY_CODE, VALIDATION_ERROR,
    };
    use crate::infrastructure::time::SystemClock;

    fn repo() -> InMemoryTourRepository {
        InMemoryTourRepository::new(Arc::new(SystemClock))
    }

    fn forest_hiker() -> NewTour {
        NewTour {
            name: Some("The Forest Hiker".into()),
            duration: Some(5),
            max_group_size: Some(25),
            difficulty: Some("easy".into()),
            ratings_average: None,
            price: Some(397.0),
            price_discount: None,
            summary: Some("Breathtaking hike through the Canadian Banff National Park".into()),
        }
    }

    #[tokio::test]
    async fn insert_applies_defaults() {
        let repo = repo();
        let created = repo.insert(forest_hiker()).await.unwrap();

        assert_eq!(created.ratings_average, DEFAULT_RATINGS_AVERAGE);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_fields_are_reported_per_field() {
        let err = repo().insert(NewTour::default()).await.unwrap_err();

        assert_eq!(err.name, VALIDATION_ERROR);
        let fields: Vec<&str> = err.errors.keys().map(String::as_str).collect();
        assert_eq!(
            fields,
            vec!["difficulty", "duration", "maxGroupSize", "name", "price"]
        );
    }

    #[tokio::test]
    async fn discount_must_stay_below_price() {
        let mut tour = forest_hiker();
        tour.price_discount = Some(500.0);

        let err = repo().insert(tour).await.unwrap_err();

        let failure = err.errors.get("priceDiscount").unwrap();
        assert_eq!(failure.message, "Discount price (500) should be below regular price");
    }

    #[tokio::test]
    async fn duplicate_names_hit_the_unique_index() {
        let repo = repo();
        repo.insert(forest_hiker()).await.unwrap();

        let err = repo.insert(forest_hiker()).await.unwrap_err();

        assert_eq!(err.code, Some(DUPLICATE_KEY_CODE));
        assert!(err.key_value.unwrap().contains_key("name"));
    }

    #[tokio::test]
    async fn malformed_ids_are_cast_errors() {
        let err = repo().find_by_id("wwwww").await.unwrap_err();
        assert_eq!(err.name, CAST_ERROR);
    }

    #[tokio::test]
    async fn update_revalidates_and_keeps_own_name() {
        let repo = repo();
        let created = repo.insert(forest_hiker()).await.unwrap();
        let id = created.id.to_string();

        let same_name = TourPatch {
            name: Some("The Forest Hiker".into()),
            price: Some(420.0),
            ..TourPatch::default()
        };
        let updated = repo.update(&id, same_name).await.unwrap().unwrap();
        assert_eq!(updated.price, 420.0);

        let bad = TourPatch {
            difficulty: Some("extreme".into()),
            ..TourPatch::default()
        };
        let err = repo.update(&id, bad).await.unwrap_err();
        assert_eq!(err.name, VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn update_of_unknown_id_returns_none() {
        let missing = TourId::generate().to_string();
        let patch = TourPatch {
            price: Some(1.0),
            ..TourPatch::default()
        };
        assert!(repo().update(&missing, patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_fails_with_not_found_shape() {
        let missing = TourId::generate().to_string();
        let err = repo().delete(&missing).await.unwrap_err();
        assert_eq!(err.name, DOCUMENT_NOT_FOUND_ERROR);
    }
}
