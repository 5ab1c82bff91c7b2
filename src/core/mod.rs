//! Core module for the study-plan engine

pub mod config;
pub mod editor;
pub mod grades;
pub mod library;
pub mod models;
pub mod mutations;
pub mod preferences;
pub mod prune;
pub mod stats;
pub mod statuses;
pub mod storage;
pub mod tracker;

/// Returns the current version of the `UniTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
