//! Sweeper Harness: runs the search engine on a vacuum-cleaning room.
//!
//! The harness owns the environment (the room snapshot and the agent's
//! cell) and everything around a search call: configuration, the sub-goal
//! loop, and the session report. Search semantics live entirely in
//! `sweeper_search`; the harness only binds problems and reads outcomes.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod worlds;
