//! HTTP controllers.

pub mod health_controller;
pub mod project_controller;
pub mod staff_controller;
