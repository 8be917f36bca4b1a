//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each interactive component owns its widget state in a local `RwSignal`
//! and reads nothing from context; pages compose them freely.

pub mod contact_form;
pub mod fade_in;
pub mod navbar;
pub mod project_gallery;
pub mod rock_breaker;
pub mod tech_comparison;
