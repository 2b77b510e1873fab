//! # JSON Storage Module
//!
//! File-backed storage implementation for the trip planner. Data lives in
//! a flat directory of JSON files, matching the record layout the domain
//! expects:
//!
//! - `trips_<user>.json`: one JSON array holding the user's full trip
//!   collection, rewritten atomically on every mutation.
//! - `current_trip.json`: the single staged-trip slot for the planning
//!   flow.
//!
//! Missing or corrupt files are normalized to empty results at this
//! boundary; higher layers never see a parse error.

pub mod connection;
pub mod staging_repository;
pub mod trip_repository;

pub use connection::JsonConnection;
pub use staging_repository::StagingRepository;
pub use trip_repository::TripRepository;
