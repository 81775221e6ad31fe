//! # API Shared
//!
//! Response types and services shared by the Ward API surfaces.
//!
//! Contains:
//! - `HealthRes` and `MessageRes` response bodies
//! - `HealthService` for liveness checks

pub mod health;

pub use health::{HealthRes, HealthService, MessageRes};
