pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTour, Tour, TourPatch};
pub use repository::TourRepository;
pub use value_objects::{Difficulty, TourId};
