//! # ASMO Service
//!
//! Catalog services for the ASMO site backend, reading through a
//! look-aside cache in front of the Postgres stores.

pub mod cache;
pub mod catalog_service;
pub mod r#impl;
pub mod metrics;

pub use cache::*;
pub use catalog_service::*;
pub use r#impl::*;
