//! Domain models for trips, itinerary days, and activities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Owner key used when no authenticated user is available.
pub const GUEST_USER_ID: &str = "guest";

/// Fallback map center (New York) used when a trip is created without one.
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    lat: 40.7128,
    lng: -74.0060,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A place reference as selected by the user. Stored by value wherever it is
/// used: an `Activity` carries its own copy, so later edits to the original
/// selection do not propagate into the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub location: Coordinates,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Category tags as reported by the place-listing collaborator.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A scheduled visit to a place within one itinerary day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub place: Place,
    /// Free-form time-of-day label, e.g. "09:30" or "after lunch".
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Activity {
    /// Generate an activity ID from the current timestamp.
    /// Format: activity-<timestamp_ms>-<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("activity-{}-{}", timestamp_ms, generate_random_suffix(4))
    }
}

/// One day of a trip's itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based day number within the trip.
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A user's travel plan. `status` is never stored on the record; it is
/// always derived from the dates (see [`crate::domain::status`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// May be absent; duration math treats it as equal to `start_date`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Places chosen for this trip, independent of day scheduling.
    #[serde(default)]
    pub selected_places: Vec<Place>,
    #[serde(default)]
    pub itinerary: Vec<Day>,
    /// Coordinate used to re-center the map when the trip is reopened.
    pub map_center: Coordinates,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Generate a trip ID from the current timestamp.
    /// Format: trip_<timestamp_ms>_<random_suffix>
    /// Example: trip_1625846400123_4af3c91e2
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("trip_{}_{}", timestamp_ms, generate_random_suffix(9))
    }

    /// Display name for the trip: the title when set, otherwise the
    /// destination.
    pub fn display_title(&self) -> &str {
        match &self.title {
            Some(title) if !title.is_empty() => title,
            _ => &self.destination,
        }
    }

    /// End of the trip's date range, falling back to `start_date` when no
    /// end date was set. `None` for drafts.
    pub fn effective_end_date(&self) -> Option<NaiveDate> {
        self.end_date.or(self.start_date)
    }
}

/// Domain errors surfaced to callers as user-facing conditions. Everything
/// else (storage write failures in particular) propagates as a generic
/// `anyhow` error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TripError {
    #[error("Trip not found: {0}")]
    NotFound(String),
    #[error("No staged trip to commit")]
    NoStagedTrip,
}

/// Generate a random hex suffix for record IDs.
fn generate_random_suffix(len: usize) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("{:x}", now % (16_u128.pow(len as u32)))
        .chars()
        .take(len)
        .collect()
}
