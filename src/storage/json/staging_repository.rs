use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::io;
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::Trip;
use crate::storage::traits::StagingStorage;

/// JSON file-backed staging slot for the trip currently being planned.
///
/// One fixed file holds at most one trip. The slot is intentionally not
/// keyed by user: it mirrors the planning flow's "the trip open right now",
/// and committing it assigns the owner.
#[derive(Clone)]
pub struct StagingRepository {
    connection: Arc<JsonConnection>,
}

impl StagingRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl StagingStorage for StagingRepository {
    fn get_staged(&self) -> Result<Option<Trip>> {
        let path = self.connection.staged_trip_file();

        if !path.exists() {
            return Ok(None);
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read staged trip {:?}: {}. Treating as empty.", path, e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<Trip>(&contents) {
            Ok(trip) => Ok(Some(trip)),
            Err(e) => {
                warn!("Corrupt staged trip {:?}: {}. Treating as empty.", path, e);
                Ok(None)
            }
        }
    }

    fn set_staged(&self, trip: &Trip) -> Result<()> {
        let path = self.connection.staged_trip_file();
        let json = serde_json::to_string_pretty(trip)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        debug!("Staged trip {} ({})", trip.id, trip.destination);
        Ok(())
    }

    fn clear_staged(&self) -> Result<()> {
        let path = self.connection.staged_trip_file();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DEFAULT_MAP_CENTER, GUEST_USER_ID};
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup_test_repo() -> (StagingRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = StagingRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn sample_trip() -> Trip {
        let now = Utc::now();
        Trip {
            id: "trip_staged".to_string(),
            user_id: GUEST_USER_ID.to_string(),
            title: None,
            destination: "Reykjavik, Iceland".to_string(),
            start_date: None,
            end_date: None,
            selected_places: Vec::new(),
            itinerary: Vec::new(),
            map_center: DEFAULT_MAP_CENTER,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_slot_reads_as_none() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.get_staged().unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites_unconditionally() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.set_staged(&sample_trip()).unwrap();

        let mut replacement = sample_trip();
        replacement.destination = "Tromsø, Norway".to_string();
        repo.set_staged(&replacement).unwrap();

        let staged = repo.get_staged().unwrap().unwrap();
        assert_eq!(staged.destination, "Tromsø, Norway");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.clear_staged().unwrap();

        repo.set_staged(&sample_trip()).unwrap();
        repo.clear_staged().unwrap();
        repo.clear_staged().unwrap();
        assert!(repo.get_staged().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_slot_reads_as_none() {
        let (repo, temp_dir) = setup_test_repo();

        fs::write(temp_dir.path().join("current_trip.json"), "][").unwrap();
        assert!(repo.get_staged().unwrap().is_none());
    }
}
