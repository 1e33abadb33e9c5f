//! # ASMO Repository
//!
//! Catalog stores backed by Postgres through SQLx.
//!
//! Every catalog (web, mobile and bot projects, staff) exposes the same
//! three operations: list ordered by creation time, fetch by id and insert.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
