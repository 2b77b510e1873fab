//! Read-side queries over a user's trips: search, status filtering, and
//! per-status statistics.
//!
//! Queries never fail on user input; the worst case is an empty result.
//! Combined search + status filtering is done by callers intersecting the
//! two result sets by trip ID.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::domain::commands::query::{
    SearchTripsQuery, SearchTripsResult, TripStats, TripStatsQuery, TripsByStatusQuery,
    TripsByStatusResult,
};
use crate::domain::status::{derive_status, TripStatus};
use crate::storage::json::{JsonConnection, TripRepository};
use crate::storage::traits::TripStorage;

/// Service for searching and filtering a user's trips.
#[derive(Clone)]
pub struct QueryService {
    trip_repository: TripRepository,
}

impl QueryService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let trip_repository = TripRepository::new(connection);
        Self { trip_repository }
    }

    /// Case-insensitive substring search against destination and title.
    ///
    /// An empty query matches every trip; callers that mean "no filter"
    /// simply skip the search instead.
    pub fn search_trips(&self, query: SearchTripsQuery) -> Result<SearchTripsResult> {
        let search_term = query.query.to_lowercase();
        let trips = self.trip_repository.list_trips(&query.user_id)?;

        let matches: Vec<_> = trips
            .into_iter()
            .filter(|trip| {
                trip.destination.to_lowercase().contains(&search_term)
                    || trip
                        .title
                        .as_ref()
                        .is_some_and(|t| t.to_lowercase().contains(&search_term))
            })
            .collect();

        info!(
            "Search '{}' matched {} trips for user {}",
            query.query,
            matches.len(),
            query.user_id
        );

        Ok(SearchTripsResult { trips: matches })
    }

    /// All trips whose derived status equals the requested one.
    pub fn trips_by_status(
        &self,
        query: TripsByStatusQuery,
        today: NaiveDate,
    ) -> Result<TripsByStatusResult> {
        let trips = self.trip_repository.list_trips(&query.user_id)?;

        let matches: Vec<_> = trips
            .into_iter()
            .filter(|trip| derive_status(trip, today) == query.status)
            .collect();

        Ok(TripsByStatusResult { trips: matches })
    }

    /// Count trips per status bucket. Each trip lands in exactly one
    /// bucket, so the total always equals the sum of the buckets.
    pub fn trip_stats(&self, query: TripStatsQuery, today: NaiveDate) -> Result<TripStats> {
        let trips = self.trip_repository.list_trips(&query.user_id)?;

        let mut stats = TripStats {
            total: trips.len(),
            upcoming: 0,
            current: 0,
            past: 0,
            draft: 0,
        };

        for trip in &trips {
            match derive_status(trip, today) {
                TripStatus::Upcoming => stats.upcoming += 1,
                TripStatus::Current => stats.current += 1,
                TripStatus::Past => stats.past += 1,
                TripStatus::Draft => stats.draft += 1,
            }
        }

        Ok(stats)
    }
}
