//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - The prediction server over HTTP
//! - Background job execution

pub mod client;
pub mod job_runner;

pub use client::{HealthStatus, HttpPredictionClient, PredictionTransport, TransportError};
pub use job_runner::{JobPoll, JobRunner};
