//! Core services and infrastructure

pub mod error_handling;
pub mod logging;
pub mod validation;
pub mod version; // build metadata from build.rs
