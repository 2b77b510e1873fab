//! Derived trip status.
//!
//! A trip's status is never stored; it is recomputed from the trip's dates
//! relative to a caller-supplied "today" every time it is displayed or
//! filtered on. Keeping this a single pure function prevents list and
//! detail views from drifting apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::Trip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Draft,
    Upcoming,
    Current,
    Past,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "draft",
            TripStatus::Upcoming => "upcoming",
            TripStatus::Current => "current",
            TripStatus::Past => "past",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(TripStatus::Draft),
            "upcoming" => Ok(TripStatus::Upcoming),
            "current" => Ok(TripStatus::Current),
            "past" => Ok(TripStatus::Past),
            _ => Err(format!("Invalid trip status: {}", s)),
        }
    }
}

/// Derive a trip's status from its dates.
///
/// - `Draft` when no start date is set.
/// - `Upcoming` when the trip starts after `today`.
/// - `Current` when `today` falls inside the trip's date range, inclusive
///   on both ends. A trip starting exactly today is current, not upcoming.
/// - `Past` otherwise.
///
/// A missing end date is treated as equal to the start date, so a one-day
/// trip only needs its start date set.
pub fn derive_status(trip: &Trip, today: NaiveDate) -> TripStatus {
    let Some(start) = trip.start_date else {
        return TripStatus::Draft;
    };
    let end = trip.end_date.unwrap_or(start);

    if start > today {
        TripStatus::Upcoming
    } else if end >= today {
        TripStatus::Current
    } else {
        TripStatus::Past
    }
}
