pub mod system;
pub mod tours;
