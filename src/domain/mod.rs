pub mod errors;
pub mod tour;
