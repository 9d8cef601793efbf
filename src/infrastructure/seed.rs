// src/infrastructure/seed.rs
use crate::domain::errors::StoreResult;
use crate::domain::tour::{NewTour, TourRepository};

fn demo_tour(name: &str, duration: i64, group: i64, difficulty: &str, price: f64) -> NewTour {
    NewTour {
        name: Some(name.into()),
        duration: Some(duration),
        max_group_size: Some(group),
        difficulty: Some(difficulty.into()),
        ratings_average: None,
        price: Some(price),
        price_discount: None,
        summary: None,
    }
}

/// Insert a handful of sample tours. Returns how many were stored.
pub async fn seed_demo_tours(repo: &dyn TourRepository) -> StoreResult<usize> {
    let tours = [
        demo_tour("The Forest Hiker", 5, 25, "easy", 397.0),
        demo_tour("The Sea Explorer", 7, 15, "medium", 497.0),
        demo_tour("The Snow Adventurer", 4, 10, "difficult", 997.0),
    ];

    let mut stored = 0;
    for tour in tours {
        repo.insert(tour).await?;
        stored += 1;
    }
    tracing::info!(count = stored, "seeded demo tours");
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{repositories::InMemoryTourRepository, time::SystemClock};
    use std::sync::Arc;

    #[tokio::test]
    async fn seeds_every_demo_tour() {
        let repo = InMemoryTourRepository::new(Arc::new(SystemClock));
        assert_eq!(seed_demo_tours(&repo).await.unwrap(), 3);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn seeding_twice_hits_the_unique_index() {
        let repo = InMemoryTourRepository::new(Arc::new(SystemClock));
        seed_demo_tours(&repo).await.unwrap();
        assert!(seed_demo_tours(&repo).await.is_err());
    }
}
