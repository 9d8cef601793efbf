pub mod tours;

pub use tours::{TourDto, TourListDto};
