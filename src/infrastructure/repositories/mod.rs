pub mod error;
pub mod memory_tour;

pub use error::{StoreFailure, detect_shape};
pub use memory_tour::InMemoryTourRepository;
