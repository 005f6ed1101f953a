//! Aggregate statistics over the accept log.
//!
//! `total_shown` comes from the client; the server keeps no record of which
//! suggestions were displayed.

use crate::entry::LoggedEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub suggestions_shown: i64,
    pub suggestions_accepted: usize,
    /// 0 when `suggestions_shown` is not positive.
    pub acceptance_rate_percent: f64,
    /// 0 when no entry carries a numeric response time.
    pub avg_response_time_min: f64,
    pub tag_counts: BTreeMap<String, usize>,
    pub log_length: usize,
}

/// Round to one decimal place from the exact binary value, ties to even.
///
/// Precision formatting rounds the exact expansion, so `0.15` (stored just
/// below) goes down and an exact tie like `6.25` goes to `6.2`.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn compute(log: &[LoggedEntry], total_shown: i64) -> Metrics {
    let suggestions_accepted = log.iter().filter(|e| e.is_accepted()).count();

    let mut tag_counts = BTreeMap::new();
    for key in log.iter().flat_map(|e| e.tag_keys()) {
        *tag_counts.entry(key).or_insert(0) += 1;
    }

    let times: Vec<f64> = log.iter().filter_map(LoggedEntry::response_time).collect();
    let avg_response_time_min = if times.is_empty() {
        0.0
    } else {
        round1(times.iter().sum::<f64>() / times.len() as f64)
    };

    let acceptance_rate_percent = if total_shown > 0 {
        round1(suggestions_accepted as f64 / total_shown as f64 * 100.0)
    } else {
        0.0
    };

    Metrics {
        suggestions_shown: total_shown,
        suggestions_accepted,
        acceptance_rate_percent,
        avg_response_time_min,
        tag_counts,
        log_length: log.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
