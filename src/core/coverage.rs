//! Coverage evaluation module.
//!
//! Evaluates, per channel, whether the guide data contains a program that
//! is airing at the evaluation timestamp, and aggregates the results into
//! a per-endpoint coverage report.

use serde::{Deserialize, Serialize};

use crate::services::epg::Channel;

/// Per-channel coverage outcome.
///
/// A three-valued result: a channel either has a program covering "now",
/// has guide data that does not cover "now", or has no guide data at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelStatus {
    /// The first program's interval contains the evaluation timestamp.
    Covered,
    /// Guide data is present but the first program does not cover "now".
    NotCovered,
    /// The channel has an empty program list.
    NoData,
}

/// Evaluate a single channel against the evaluation timestamp.
///
/// Only the first program is consulted; the backend returns the program
/// list anchored at the requested time, so the first entry is the one
/// expected to be on air. The interval test is `begin < now <= end`:
/// exclusive at the beginning, inclusive at the end.
pub fn evaluate_channel(channel: &Channel, now: i64) -> ChannelStatus {
    match channel.programs.first() {
        Some(program) => {
            if program.begin < now && now <= program.end {
                ChannelStatus::Covered
            } else {
                ChannelStatus::NotCovered
            }
        }
        None => ChannelStatus::NoData,
    }
}

/// Coverage summary for one endpoint at one evaluation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Unix timestamp the listing was evaluated against.
    pub timestamp: i64,
    /// Channels whose first program covers the timestamp.
    pub covered: usize,
    /// All channel entries returned by the listing, NoData included.
    pub evaluated: usize,
    /// Channels with an empty program list.
    pub no_data: usize,
    /// Channel count reported by the names endpoint, when fetched.
    pub total_channels: Option<usize>,
}

impl CoverageReport {
    /// Build a report from per-channel statuses.
    pub fn from_statuses(
        statuses: &[ChannelStatus],
        timestamp: i64,
        total_channels: Option<usize>,
    ) -> Self {
        let covered = statuses
            .iter()
            .filter(|s| **s == ChannelStatus::Covered)
            .count();
        let no_data = statuses
            .iter()
            .filter(|s| **s == ChannelStatus::NoData)
            .count();

        Self {
            timestamp,
            covered,
            evaluated: statuses.len(),
            no_data,
            total_channels,
        }
    }

    /// Evaluate a channel listing and build the report in one step.
    pub fn evaluate(channels: &[Channel], timestamp: i64, total_channels: Option<usize>) -> Self {
        let statuses: Vec<ChannelStatus> = channels
            .iter()
            .map(|c| evaluate_channel(c, timestamp))
            .collect();
        Self::from_statuses(&statuses, timestamp, total_channels)
    }

    /// Coverage percentage over all evaluated entries.
    ///
    /// Channels without guide data count toward the denominator but never
    /// the numerator. Returns `None` when the listing was empty, rather
    /// than dividing by zero.
    pub fn coverage_percent(&self) -> Option<f64> {
        if self.evaluated == 0 {
            return None;
        }
        Some(self.covered as f64 / self.evaluated as f64 * 100.0)
    }
}
