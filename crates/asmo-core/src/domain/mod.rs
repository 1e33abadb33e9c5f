//! Domain entities and catalog descriptors.

pub mod catalog;
pub mod project;
pub mod staff;

pub use catalog::*;
pub use project::*;
pub use staff::*;
