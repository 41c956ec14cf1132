//! EPG Coverage Checker Library
//!
//! A library for checking EPG (Electronic Program Guide) data freshness
//! across IPTV backend endpoints.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
