//! Commands and results for trip CRUD operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Coordinates, Day, Place, Trip};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTripsCommand {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTripsResult {
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTripCommand {
    pub trip_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTripResult {
    pub trip: Option<Trip>,
}

/// Data for a new trip. Everything except the destination is optional;
/// defaults are filled in at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTripCommand {
    pub user_id: String,
    pub destination: String,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub selected_places: Vec<Place>,
    #[serde(default)]
    pub itinerary: Vec<Day>,
    pub map_center: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripResult {
    pub trip: Trip,
}

/// Patch for an existing trip. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTripCommand {
    pub trip_id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub selected_places: Option<Vec<Place>>,
    pub itinerary: Option<Vec<Day>>,
    pub map_center: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTripResult {
    pub trip: Trip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTripCommand {
    pub trip_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTripResult {
    pub success_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateTripCommand {
    pub trip_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateTripResult {
    pub trip: Trip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSelectedPlaceCommand {
    pub trip_id: String,
    pub user_id: String,
    pub place: Place,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSelectedPlaceCommand {
    pub trip_id: String,
    pub user_id: String,
    pub place_id: String,
}
