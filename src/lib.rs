//! # Connect Four
//!
//! Rules engine and turn loop for Connect-Four-style games on a fixed
//! 6-row by 7-column grid, with pluggable move-selection agents.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, turn loop
//! - [`agents`] — Agent trait and the built-in policies
//! - [`tournament`] — Demo round-robin loop with win-rate statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agents;
pub mod config;
pub mod error;
pub mod game;
pub mod tournament;
