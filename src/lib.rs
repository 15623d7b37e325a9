pub mod app;
pub mod core;
pub mod metadata;
pub mod updater;
pub mod versioning;
