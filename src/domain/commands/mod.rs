//! Command and result types for the domain services.
//!
//! Services take explicit command structs and return explicit result
//! structs so that callers (UI layers, tests) never pass ambient state.

pub mod query;
pub mod staging;
pub mod trip;
