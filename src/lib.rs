//! # Travella Core
//!
//! Client-side trip planning library: trip records, derived trip status,
//! search and stats, day-by-day itinerary building, and a staging slot for
//! the trip currently being planned. Everything persists to a local
//! directory of JSON files; there is no server and no network dependency.
//!
//! The [`Planner`] struct wires the domain services over one shared
//! storage connection. It is an explicit context object: construct one per
//! data directory and pass it where it is needed, instead of reaching for
//! process-wide state.
//!
//! ```no_run
//! use travella::Planner;
//! use travella::domain::commands::trip::CreateTripCommand;
//!
//! let planner = Planner::new_default()?;
//! let trip = planner
//!     .trip_service
//!     .create_trip(CreateTripCommand {
//!         user_id: "guest".to_string(),
//!         destination: "Tokyo, Japan".to_string(),
//!         ..Default::default()
//!     })?
//!     .trip;
//! # anyhow::Ok(())
//! ```

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use domain::{
    derive_status, ItineraryService, QueryService, StagingService, TripService, TripStatus,
};
pub use storage::JsonConnection;

/// Main entry point that orchestrates all services over one storage
/// connection.
#[derive(Clone)]
pub struct Planner {
    pub trip_service: TripService,
    pub query_service: QueryService,
    pub itinerary_service: ItineraryService,
    pub staging_service: StagingService,
}

impl Planner {
    /// Create a planner storing its data under the given directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        Ok(Self::from_connection(Arc::new(JsonConnection::new(
            base_directory,
        )?)))
    }

    /// Create a planner in the platform data directory.
    pub fn new_default() -> Result<Self> {
        Ok(Self::from_connection(Arc::new(JsonConnection::new_default()?)))
    }

    fn from_connection(connection: Arc<JsonConnection>) -> Self {
        let trip_service = TripService::new(connection.clone());
        let query_service = QueryService::new(connection.clone());
        let itinerary_service = ItineraryService::new();
        let staging_service = StagingService::new(connection, trip_service.clone());

        Planner {
            trip_service,
            query_service,
            itinerary_service,
            staging_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::trip::{CreateTripCommand, GetTripCommand, UpdateTripCommand};
    use crate::domain::models::{Coordinates, Place};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    /// End-to-end planning flow: create a trip, build its itinerary,
    /// schedule an activity, move it to another day, and persist every
    /// step through the trip store.
    #[test]
    fn test_planning_flow_end_to_end() {
        let temp_dir = tempdir().unwrap();
        let planner = Planner::new(temp_dir.path()).unwrap();

        let trip = planner
            .trip_service
            .create_trip(CreateTripCommand {
                user_id: "u1".to_string(),
                destination: "Tokyo".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 5, 1),
                end_date: NaiveDate::from_ymd_opt(2025, 5, 3),
                ..Default::default()
            })
            .unwrap()
            .trip;

        // Three-day skeleton with empty activity lists.
        let mut itinerary = planner.itinerary_service.initialize_itinerary(&trip);
        assert_eq!(itinerary.len(), 3);
        assert!(itinerary.iter().all(|d| d.activities.is_empty()));

        let place = Place {
            id: "shibuya-crossing".to_string(),
            name: "Shibuya Crossing".to_string(),
            address: None,
            location: Coordinates { lat: 35.6595, lng: 139.7005 },
            rating: Some(4.7),
            tags: vec!["landmark".to_string()],
        };

        // Add to day 2, then move to day 1.
        planner.itinerary_service.add_activity(&mut itinerary, 1, place);
        planner.itinerary_service.move_activity(&mut itinerary, 1, 0, 0);
        assert_eq!(itinerary[1].activities.len(), 0);
        assert_eq!(itinerary[0].activities.len(), 1);

        // Persist the itinerary and read it back.
        planner
            .trip_service
            .update_trip(UpdateTripCommand {
                trip_id: trip.id.clone(),
                user_id: "u1".to_string(),
                itinerary: Some(itinerary.clone()),
                ..Default::default()
            })
            .unwrap();

        let stored = planner
            .trip_service
            .get_trip(GetTripCommand {
                trip_id: trip.id,
                user_id: "u1".to_string(),
            })
            .unwrap()
            .trip
            .unwrap();
        assert_eq!(stored.itinerary, itinerary);
    }
}
