//! # API Shared
//!
//! Shared definitions for the MedGuard front ends.
//!
//! Contains:
//! - JSON request/response types with OpenAPI schemas (`wire` module)
//! - Request validation and the `CheckService` that drives the engine
//! - `HealthService`
//!
//! Used by `api-rest` and the `medguard` CLI.

pub mod health;
pub mod service;
pub mod wire;

pub use health::HealthService;
pub use service::{resolve_age, resolve_medicines, CheckService};
pub use wire::*;
