//! # ASMO Server Library
//!
//! Component wiring and startup utilities for the ASMO site backend.

pub mod di;
pub mod startup;
