pub mod collections;
pub mod errors;
