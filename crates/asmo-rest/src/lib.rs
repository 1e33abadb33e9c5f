//! # ASMO REST
//!
//! REST API layer using Axum for the ASMO site backend.
//! Provides HTTP endpoints for the project catalogs, the staff directory,
//! and the health check.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
