//! Scholarship discovery service: a catalog of scholarships, student
//! profiles, and the eligibility matching engine that scores one against the
//! other.

pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
