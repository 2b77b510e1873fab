//! Domain models for the trip planner.

pub mod trip;

pub use trip::{
    Activity, Coordinates, Day, Place, Trip, TripError, DEFAULT_MAP_CENTER, GUEST_USER_ID,
};
