//! The single-slot staging area for the trip currently being planned.
//!
//! The multi-step planning flow (destination entry, place selection,
//! itinerary building) edits a trip here, decoupled from the persisted
//! collection: abandoning the flow leaves no partial record behind.
//! Finalizing the flow commits the staged trip into the collection.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::commands::staging::{CommitStagedCommand, CommitStagedResult};
use crate::domain::commands::trip::CreateTripCommand;
use crate::domain::models::{Trip, TripError};
use crate::domain::trip_service::TripService;
use crate::storage::json::{JsonConnection, StagingRepository};
use crate::storage::traits::StagingStorage;

/// Service for the staged (in-progress) trip.
#[derive(Clone)]
pub struct StagingService {
    staging_repository: StagingRepository,
    trip_service: TripService,
}

impl StagingService {
    pub fn new(connection: Arc<JsonConnection>, trip_service: TripService) -> Self {
        let staging_repository = StagingRepository::new(connection);
        Self {
            staging_repository,
            trip_service,
        }
    }

    /// Read the staged trip, if any.
    pub fn get_staged(&self) -> Result<Option<Trip>> {
        self.staging_repository.get_staged()
    }

    /// Overwrite the staging slot with this trip.
    pub fn set_staged(&self, trip: &Trip) -> Result<()> {
        self.staging_repository.set_staged(trip)
    }

    /// Empty the staging slot.
    pub fn clear_staged(&self) -> Result<()> {
        self.staging_repository.clear_staged()
    }

    /// Commit the staged trip into the user's collection as a new record,
    /// then clear the slot. The committed trip gets a fresh ID and
    /// timestamps; everything the user staged (dates, places, itinerary,
    /// map center) is carried over.
    pub fn commit_staged(&self, command: CommitStagedCommand) -> Result<CommitStagedResult> {
        let staged = self
            .staging_repository
            .get_staged()?
            .ok_or(TripError::NoStagedTrip)?;

        info!(
            "Committing staged trip to {} for user {}",
            staged.destination, command.user_id
        );

        let create_command = CreateTripCommand {
            user_id: command.user_id,
            destination: staged.destination,
            title: staged.title,
            start_date: staged.start_date,
            end_date: staged.end_date,
            selected_places: staged.selected_places,
            itinerary: staged.itinerary,
            map_center: Some(staged.map_center),
        };

        let created = self.trip_service.create_trip(create_command)?;
        self.staging_repository.clear_staged()?;

        Ok(CommitStagedResult { trip: created.trip })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::trip::ListTripsCommand;
    use crate::domain::models::{DEFAULT_MAP_CENTER, GUEST_USER_ID};
    use chrono::{NaiveDate, Utc};
    use tempfile::tempdir;

    fn setup_test() -> (StagingService, TripService, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let conn = Arc::new(JsonConnection::new(temp_dir.path().to_path_buf()).unwrap());
        let trip_service = TripService::new(conn.clone());
        let staging_service = StagingService::new(conn, trip_service.clone());
        (staging_service, trip_service, temp_dir)
    }

    fn staged_trip() -> Trip {
        let now = Utc::now();
        Trip {
            id: "trip_staged".to_string(),
            user_id: GUEST_USER_ID.to_string(),
            title: Some("Spring in Kyoto".to_string()),
            destination: "Kyoto, Japan".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 4),
            selected_places: Vec::new(),
            itinerary: Vec::new(),
            map_center: DEFAULT_MAP_CENTER,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_staged_slot_lifecycle() {
        let (staging, _trips, _temp_dir) = setup_test();

        assert!(staging.get_staged().unwrap().is_none());

        staging.set_staged(&staged_trip()).unwrap();
        assert_eq!(
            staging.get_staged().unwrap().unwrap().destination,
            "Kyoto, Japan"
        );

        staging.clear_staged().unwrap();
        assert!(staging.get_staged().unwrap().is_none());
    }

    #[test]
    fn test_commit_creates_record_and_clears_slot() {
        let (staging, trips, _temp_dir) = setup_test();

        staging.set_staged(&staged_trip()).unwrap();

        let committed = staging
            .commit_staged(CommitStagedCommand {
                user_id: "u1".to_string(),
            })
            .unwrap()
            .trip;

        assert_ne!(committed.id, "trip_staged");
        assert_eq!(committed.user_id, "u1");
        assert_eq!(committed.title.as_deref(), Some("Spring in Kyoto"));
        assert_eq!(committed.start_date, NaiveDate::from_ymd_opt(2025, 4, 1));

        // Slot is emptied and the record landed in the collection.
        assert!(staging.get_staged().unwrap().is_none());
        let listed = trips
            .list_trips(ListTripsCommand { user_id: "u1".to_string() })
            .unwrap()
            .trips;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, committed.id);
    }

    #[test]
    fn test_commit_empty_slot_fails() {
        let (staging, _trips, _temp_dir) = setup_test();

        let err = staging
            .commit_staged(CommitStagedCommand {
                user_id: GUEST_USER_ID.to_string(),
            })
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TripError>(),
            Some(&TripError::NoStagedTrip)
        );
    }

    #[test]
    fn test_abandoned_session_leaves_no_record() {
        let (staging, trips, _temp_dir) = setup_test();

        staging.set_staged(&staged_trip()).unwrap();
        staging.clear_staged().unwrap();

        let listed = trips
            .list_trips(ListTripsCommand { user_id: GUEST_USER_ID.to_string() })
            .unwrap()
            .trips;
        assert!(listed.is_empty());
    }
}
