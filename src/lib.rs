//! Educational credit score what-if estimator.
//!
//! [`scoring::estimate`] turns an [`input::InputRecord`] snapshot into a
//! projected score range, a per-factor breakdown and up to three tips.

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
