//! Service implementations.

mod catalog_service_impl;

pub use catalog_service_impl::*;
