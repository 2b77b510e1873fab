use anyhow::Result;
use log::{debug, info, warn};
use std::fs;
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::Trip;
use crate::storage::traits::TripStorage;

/// JSON file-backed trip repository.
///
/// Each user's trips are stored as one JSON array in a file of their own.
/// Every mutation rewrites the whole collection atomically (temp file +
/// rename). O(n) per write, which is fine at single-user scale.
#[derive(Clone)]
pub struct TripRepository {
    connection: Arc<JsonConnection>,
}

impl TripRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Load a user's full trip collection.
    ///
    /// A missing file means the user has no trips yet. An unreadable or
    /// unparseable file is normalized to an empty collection with a
    /// warning; a broken store degrades to "no trips", it never takes the
    /// application down.
    fn load_collection(&self, user_id: &str) -> Vec<Trip> {
        let path = self.connection.trips_file(user_id);

        if !path.exists() {
            debug!("No trip file for user {}, returning empty collection", user_id);
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read trip file {:?}: {}. Treating as empty.", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Trip>>(&contents) {
            Ok(trips) => trips,
            Err(e) => {
                warn!("Corrupt trip file {:?}: {}. Treating as empty.", path, e);
                Vec::new()
            }
        }
    }

    /// Persist a user's full trip collection atomically.
    fn save_collection(&self, user_id: &str, trips: &[Trip]) -> Result<()> {
        let path = self.connection.trips_file(user_id);
        let json = serde_json::to_string_pretty(trips)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} trips for user {}", trips.len(), user_id);
        Ok(())
    }
}

impl TripStorage for TripRepository {
    fn list_trips(&self, user_id: &str) -> Result<Vec<Trip>> {
        Ok(self.load_collection(user_id))
    }

    fn get_trip(&self, user_id: &str, trip_id: &str) -> Result<Option<Trip>> {
        let trips = self.load_collection(user_id);
        Ok(trips.into_iter().find(|t| t.id == trip_id))
    }

    fn store_trip(&self, trip: &Trip) -> Result<()> {
        let mut trips = self.load_collection(&trip.user_id);
        trips.push(trip.clone());
        self.save_collection(&trip.user_id, &trips)?;
        info!("Stored trip {} for user {}", trip.id, trip.user_id);
        Ok(())
    }

    fn update_trip(&self, trip: &Trip) -> Result<bool> {
        let mut trips = self.load_collection(&trip.user_id);

        let Some(existing) = trips.iter_mut().find(|t| t.id == trip.id) else {
            return Ok(false);
        };
        *existing = trip.clone();

        self.save_collection(&trip.user_id, &trips)?;
        Ok(true)
    }

    fn delete_trip(&self, user_id: &str, trip_id: &str) -> Result<bool> {
        let mut trips = self.load_collection(user_id);
        let before = trips.len();
        trips.retain(|t| t.id != trip_id);

        if trips.len() == before {
            return Ok(false);
        }

        self.save_collection(user_id, &trips)?;
        info!("Deleted trip {} for user {}", trip_id, user_id);
        Ok(true)
    }
}
