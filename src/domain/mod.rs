//! # Domain Module
//!
//! Business logic for the trip planner. Everything here is storage- and
//! UI-agnostic: services operate on domain models through the storage
//! traits and take explicit command structs.
//!
//! ## Module Organization
//!
//! - **trip_service**: trip CRUD, duplication, and selected-place upkeep
//! - **query_service**: search, status filtering, and per-status stats
//! - **itinerary_service**: day-bucket expansion and activity mutations
//! - **staging_service**: the single-slot trip being planned right now
//! - **status**: the one place trip status is derived from dates
//! - **models** / **commands**: record types and service inputs/outputs
//!
//! ## Core Rules
//!
//! - Status is derived, never stored; every read recomputes it.
//! - Each trip collection belongs to one `user_id` partition key.
//! - Itinerary mutations never persist; callers save through the trip
//!   service, so a staged edit can always be abandoned.

pub mod commands;
pub mod itinerary_service;
pub mod models;
pub mod query_service;
pub mod staging_service;
pub mod status;
pub mod trip_service;

pub use itinerary_service::ItineraryService;
pub use query_service::QueryService;
pub use staging_service::StagingService;
pub use status::{derive_status, TripStatus};
pub use trip_service::TripService;
