//! Work-schedule scenario comparator
//!
//! This crate computes the pay of a set of named work-schedule scenarios and
//! ranks them. Each scenario is a list of fixed shift kinds (morning,
//! afternoon, night) on calendar dates. Worked hours are sliced on clock
//! hours and classified as normal, night, Sunday or night+Sunday, which
//! earn 0%, 15%, 25% and 40% on top of the base hourly rate.
//!
//! The crate exposes the pure calculation core, a plain-text report
//! formatter, and an axum HTTP API over an in-memory scenario store.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod report;
