// curricula-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// Classification engine, group model and encoding, ports, domain errors.
pub mod domain;

// Adapters: CSV tables, YAML config, atomic file writes.
pub mod infrastructure;

// Use cases: assemble, verify, sort, split, diff, triage.
pub mod application;

pub mod error;

pub use error::CurriculaError;
