//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a thin route shell; interactive behavior lives in
//! `components`, which own their state.

pub mod contact;
pub mod fleet;
pub mod home;
pub mod neda;
pub mod not_found;
pub mod projects;
pub mod services;
