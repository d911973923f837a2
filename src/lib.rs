//! Userdeck - a terminal browser for random mock user profiles
//!
//! This library provides the core functionality for fetching a batch of
//! mock users from the random-data-api endpoint and paging through them
//! one at a time in a two-screen TUI flow.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod screens;
pub mod services;
pub mod state;
pub mod styles;
pub mod tui;
pub mod widgets;

// Re-exports for convenience
pub use api::{display_or_default, UserApiClient, UserRecord};
pub use state::UserSession;
