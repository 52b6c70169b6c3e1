pub mod error;
pub mod probability;
pub mod region;
pub mod types;
