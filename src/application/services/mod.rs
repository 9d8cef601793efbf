// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::TourCommandService, queries::TourQueryService},
    domain::tour::TourRepository,
};

pub struct ApplicationServices {
    pub tour_commands: Arc<TourCommandService>,
    pub tour_queries: Arc<TourQueryService>,
}

impl ApplicationServices {
    pub fn new(tour_repo: Arc<dyn TourRepository>) -> Self {
        let tour_commands = Arc::new(TourCommandService::new(Arc::clone(&tour_repo)));
        let tour_queries = Arc::new(TourQueryService::new(tour_repo));

        Self {
            tour_commands,
            tour_queries,
        }
    }
}
