//! Storage layer: abstraction traits and the JSON file implementation.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, StagingRepository, TripRepository};
pub use traits::{StagingStorage, TripStorage};
