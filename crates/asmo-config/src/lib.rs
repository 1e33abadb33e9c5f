//! # ASMO Config
//!
//! Configuration management for the ASMO site backend.
//! Supports layered configuration from files and environment variables,
//! with the flat variables of older deployments honoured as fallbacks.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
