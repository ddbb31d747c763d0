//! Sweeper Kernel: the grid carrier that the search engine plans over.
//!
//! # API Surface
//!
//! - [`carrier::grid::GridSnapshot`] -- read-only room snapshot (walls, dirt)
//! - [`operators::apply::legal_moves`] -- the moves available from a cell
//! - [`operators::apply::apply`] -- validated move application
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 fingerprints
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`. `proof` depends on nothing internal.
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
