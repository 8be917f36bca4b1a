//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure derivations
//! from page and component logic to improve reuse and testability.

pub mod browser;
pub mod deep_link;
pub mod fade;
pub mod nav_style;
pub mod routes;
pub mod timer;
