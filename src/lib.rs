//! projboard - Terminal dashboard for tracking client projects
//!
//! This library crate exposes internal modules for integration testing.

pub mod cli;
pub mod config;
pub mod data;
pub mod tui;
