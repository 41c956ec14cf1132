//! Core coverage evaluation logic.

pub mod coverage;
