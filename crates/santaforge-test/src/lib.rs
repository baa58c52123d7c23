//! Shared test fixtures for SantaForge crates.
//!
//! This crate provides data builders and a brute-force oracle for testing.
//! It depends only on `santaforge-core` so every crate can use it.
//!
//! - [`fixtures`] - participant and restriction builders
//! - [`oracle`] - exhaustive enumeration of valid assignments
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! santaforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use santaforge_test::{participants, restrictions};
//! use santaforge_test::oracle::enumerate_assignments;
//! ```

pub mod fixtures;
pub mod oracle;

// Re-export commonly used builders at crate root for convenience
pub use fixtures::{ids, numbered_participants, participants, restrictions};
pub use oracle::{count_valid_assignments, enumerate_assignments};
