//! CLI command handlers for `UniTracker`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod edit;
pub mod grade;
pub mod library;
pub mod mark;
pub mod plan;
pub mod prefs;
pub mod reset;
pub mod show;
pub mod stats;
