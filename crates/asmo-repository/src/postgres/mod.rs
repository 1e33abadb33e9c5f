//! Postgres store implementations.

mod project_store;
mod staff_store;

pub use project_store::*;
pub use staff_store::*;
