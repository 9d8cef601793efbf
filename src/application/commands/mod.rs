pub mod tours;

pub use tours::{CreateTourCommand, TourCommandService, UpdateTourCommand};
