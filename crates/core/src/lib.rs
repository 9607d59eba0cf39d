//! Domain logic for the diary service.
//!
//! This crate has zero internal deps and no IO: every rule that decides
//! what gets written (summary truncation, mood normalization, the
//! illustration fallback policy, identifier/date parsing) lives here as a
//! plain function so it can be exercised without a database or network.

pub mod diary;
pub mod error;
pub mod types;
