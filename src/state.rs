//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RentalService;
use crate::domain::repositories::RentalRepository;

#[derive(Clone)]
pub struct AppState {
    pub rental_service: Arc<RentalService<dyn RentalRepository>>,
}

impl AppState {
    /// Builds the state around any rental repository.
    pub fn new(repository: Arc<dyn RentalRepository>) -> Self {
        Self {
            rental_service: Arc::new(RentalService::new(repository)),
        }
    }
}
