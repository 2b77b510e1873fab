//! Storage abstraction traits.
//!
//! The domain services talk to storage through these traits so the backing
//! store can be swapped (JSON files today, anything keyed-by-string
//! tomorrow) without touching domain logic.
//!
//! All operations are synchronous; trip data is local and never gated on
//! network availability.

use anyhow::Result;

use crate::domain::models::Trip;

/// Interface for the per-user trip collection.
///
/// Collections are partitioned by `user_id` and persisted as a whole on
/// every mutation: each write re-serializes the full collection before the
/// call returns, so a single caller always observes fully-applied writes.
pub trait TripStorage: Send + Sync {
    /// List all trips for a user in insertion order. Missing or corrupt
    /// storage reads as an empty collection, never an error.
    fn list_trips(&self, user_id: &str) -> Result<Vec<Trip>>;

    /// Retrieve a specific trip by ID from the user's collection.
    fn get_trip(&self, user_id: &str, trip_id: &str) -> Result<Option<Trip>>;

    /// Append a new trip to its owner's collection.
    fn store_trip(&self, trip: &Trip) -> Result<()>;

    /// Replace the stored trip with the same ID.
    /// Returns false if no trip with that ID exists.
    fn update_trip(&self, trip: &Trip) -> Result<bool>;

    /// Remove a trip from the user's collection.
    /// Returns false if no trip with that ID exists.
    fn delete_trip(&self, user_id: &str, trip_id: &str) -> Result<bool>;
}

/// Interface for the single-slot staged trip.
///
/// The staging slot is deliberately separate from the trip collections: an
/// abandoned planning session leaves no partial record behind.
pub trait StagingStorage: Send + Sync {
    /// Read the staged trip. Missing or corrupt storage reads as `None`.
    fn get_staged(&self) -> Result<Option<Trip>>;

    /// Overwrite the slot unconditionally.
    fn set_staged(&self, trip: &Trip) -> Result<()>;

    /// Empty the slot. A no-op when the slot is already empty.
    fn clear_staged(&self) -> Result<()>;
}
