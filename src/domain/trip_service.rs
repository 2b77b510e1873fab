//! Trip CRUD operations over the per-user trip collections.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::trip::{
    AddSelectedPlaceCommand, CreateTripCommand, CreateTripResult, DeleteTripCommand,
    DeleteTripResult, DuplicateTripCommand, DuplicateTripResult, GetTripCommand, GetTripResult,
    ListTripsCommand, ListTripsResult, RemoveSelectedPlaceCommand, UpdateTripCommand,
    UpdateTripResult,
};
use crate::domain::models::{Trip, TripError, DEFAULT_MAP_CENTER};
use crate::storage::json::{JsonConnection, TripRepository};
use crate::storage::traits::TripStorage;

/// Service for managing a user's saved trips.
#[derive(Clone)]
pub struct TripService {
    trip_repository: TripRepository,
}

impl TripService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let trip_repository = TripRepository::new(connection);
        Self { trip_repository }
    }

    /// List all trips for a user in insertion order.
    pub fn list_trips(&self, command: ListTripsCommand) -> Result<ListTripsResult> {
        let trips = self.trip_repository.list_trips(&command.user_id)?;
        info!("Found {} trips for user {}", trips.len(), command.user_id);
        Ok(ListTripsResult { trips })
    }

    /// Get a trip by ID.
    pub fn get_trip(&self, command: GetTripCommand) -> Result<GetTripResult> {
        let trip = self
            .trip_repository
            .get_trip(&command.user_id, &command.trip_id)?;

        if trip.is_none() {
            warn!("Trip not found: {}", command.trip_id);
        }

        Ok(GetTripResult { trip })
    }

    /// Create a new trip, filling in the generated fields and defaults.
    pub fn create_trip(&self, command: CreateTripCommand) -> Result<CreateTripResult> {
        info!(
            "Creating trip to {} for user {}",
            command.destination, command.user_id
        );

        self.validate_destination(&command.destination)?;
        self.validate_date_range(&command)?;

        let now = Utc::now();
        let trip = Trip {
            id: Trip::generate_id(now.timestamp_millis() as u64),
            user_id: command.user_id,
            title: command.title,
            destination: command.destination.trim().to_string(),
            start_date: command.start_date,
            end_date: command.end_date,
            selected_places: command.selected_places,
            itinerary: command.itinerary,
            map_center: command.map_center.unwrap_or(DEFAULT_MAP_CENTER),
            created_at: now,
            updated_at: now,
        };

        self.trip_repository.store_trip(&trip)?;

        info!("Created trip {} ({})", trip.id, trip.display_title());

        Ok(CreateTripResult { trip })
    }

    /// Merge a patch onto an existing trip and persist it.
    pub fn update_trip(&self, command: UpdateTripCommand) -> Result<UpdateTripResult> {
        info!("Updating trip: {}", command.trip_id);

        let mut trip = self
            .trip_repository
            .get_trip(&command.user_id, &command.trip_id)?
            .ok_or(TripError::NotFound(command.trip_id.clone()))?;

        if let Some(title) = command.title {
            trip.title = Some(title);
        }
        if let Some(destination) = command.destination {
            self.validate_destination(&destination)?;
            trip.destination = destination.trim().to_string();
        }
        if let Some(start_date) = command.start_date {
            trip.start_date = Some(start_date);
        }
        if let Some(end_date) = command.end_date {
            trip.end_date = Some(end_date);
        }
        if let Some(selected_places) = command.selected_places {
            trip.selected_places = selected_places;
        }
        if let Some(itinerary) = command.itinerary {
            trip.itinerary = itinerary;
        }
        if let Some(map_center) = command.map_center {
            trip.map_center = map_center;
        }

        if let (Some(start), Some(end)) = (trip.start_date, trip.end_date) {
            if end < start {
                return Err(anyhow::anyhow!("Trip end date cannot be before start date"));
            }
        }

        trip.updated_at = Utc::now();
        self.trip_repository.update_trip(&trip)?;

        Ok(UpdateTripResult { trip })
    }

    /// Delete a trip.
    pub fn delete_trip(&self, command: DeleteTripCommand) -> Result<DeleteTripResult> {
        info!("Deleting trip: {}", command.trip_id);

        let deleted = self
            .trip_repository
            .delete_trip(&command.user_id, &command.trip_id)?;
        if !deleted {
            warn!("Attempted to delete a non-existent trip: {}", command.trip_id);
            return Err(TripError::NotFound(command.trip_id).into());
        }

        Ok(DeleteTripResult {
            success_message: format!("Trip '{}' deleted successfully", command.trip_id),
        })
    }

    /// Clone an existing trip into a fresh record: new ID, cleared dates
    /// and timestamps, title suffixed with "(Copy)". The original record
    /// is left untouched.
    pub fn duplicate_trip(&self, command: DuplicateTripCommand) -> Result<DuplicateTripResult> {
        info!("Duplicating trip: {}", command.trip_id);

        let original = self
            .trip_repository
            .get_trip(&command.user_id, &command.trip_id)?
            .ok_or(TripError::NotFound(command.trip_id.clone()))?;

        let create_command = CreateTripCommand {
            user_id: command.user_id,
            destination: original.destination.clone(),
            title: Some(format!("{} (Copy)", original.display_title())),
            start_date: None,
            end_date: None,
            selected_places: original.selected_places.clone(),
            itinerary: original.itinerary.clone(),
            map_center: Some(original.map_center),
        };

        let result = self.create_trip(create_command)?;
        Ok(DuplicateTripResult { trip: result.trip })
    }

    /// Add a place to the trip's selection. Inserting a place whose ID is
    /// already selected is skipped silently.
    pub fn add_selected_place(&self, command: AddSelectedPlaceCommand) -> Result<UpdateTripResult> {
        let mut trip = self
            .trip_repository
            .get_trip(&command.user_id, &command.trip_id)?
            .ok_or(TripError::NotFound(command.trip_id.clone()))?;

        if trip.selected_places.iter().any(|p| p.id == command.place.id) {
            info!(
                "Place {} already selected for trip {}, skipping",
                command.place.id, trip.id
            );
            return Ok(UpdateTripResult { trip });
        }

        trip.selected_places.push(command.place);
        trip.updated_at = Utc::now();
        self.trip_repository.update_trip(&trip)?;

        Ok(UpdateTripResult { trip })
    }

    /// Remove a place from the trip's selection by place ID.
    pub fn remove_selected_place(
        &self,
        command: RemoveSelectedPlaceCommand,
    ) -> Result<UpdateTripResult> {
        let mut trip = self
            .trip_repository
            .get_trip(&command.user_id, &command.trip_id)?
            .ok_or(TripError::NotFound(command.trip_id.clone()))?;

        trip.selected_places.retain(|p| p.id != command.place_id);
        trip.updated_at = Utc::now();
        self.trip_repository.update_trip(&trip)?;

        Ok(UpdateTripResult { trip })
    }

    fn validate_destination(&self, destination: &str) -> Result<()> {
        if destination.trim().is_empty() {
            return Err(anyhow::anyhow!("Trip destination cannot be empty"));
        }
        if destination.len() > 200 {
            return Err(anyhow::anyhow!("Trip destination cannot exceed 200 characters"));
        }
        Ok(())
    }

    fn validate_date_range(&self, command: &CreateTripCommand) -> Result<()> {
        if let (Some(start), Some(end)) = (command.start_date, command.end_date) {
            if end < start {
                return Err(anyhow::anyhow!("Trip end date cannot be before start date"));
            }
        }
        Ok(())
    }
}
