//! Queries and results for searching and filtering trips.

use serde::{Deserialize, Serialize};

use crate::domain::models::Trip;
use crate::domain::status::TripStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTripsQuery {
    pub query: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTripsResult {
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripsByStatusQuery {
    pub status: TripStatus,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripsByStatusResult {
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripStatsQuery {
    pub user_id: String,
}

/// Per-status trip counts. Every trip lands in exactly one bucket, so
/// `total` always equals the sum of the four buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripStats {
    pub total: usize,
    pub upcoming: usize,
    pub current: usize,
    pub past: usize,
    pub draft: usize,
}
