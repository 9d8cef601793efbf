pub mod tours;

pub use tours::TourQueryService;
