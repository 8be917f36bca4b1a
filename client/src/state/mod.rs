//! Widget-local UI state.
//!
//! DESIGN
//! ======
//! Each interactive widget owns exactly one of these values in an
//! `RwSignal` created inside the component; nothing here is provided as
//! app-wide context. Types are plain data so transitions test natively.

pub mod comparison;
pub mod contact;
pub mod gallery;
pub mod nav;
pub mod rock_break;
