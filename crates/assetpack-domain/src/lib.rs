//! Pure policy evaluation (no IO).
//!
//! Input: one root target and its flattened dependency list, produced elsewhere.
//! Output: a [`report::Report`] with violations, statistics and the ignore-set.

#![forbid(unsafe_code)]

pub mod checks;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::analyze;
