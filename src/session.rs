//! Session store
//!
//! Ephemeral state for one operator session: the configured endpoint and
//! credentials, a chronological request log, and the last-seen result per
//! scenario. Owned by the app and passed by reference to every component;
//! nothing here survives a restart.

use crate::types::Scenario;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub base_url: String,
    pub api_key: String,
}

/// One row of the request log. Created after every dispatcher call,
/// regardless of outcome; insertion order is significant.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub method: String,
    pub status_code: Option<u16>,
    /// Elapsed wall-clock seconds; present whenever the call got far enough
    /// to be timed (which is every call, including failures).
    pub response_time: Option<f64>,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestStats {
    pub total: usize,
    pub succeeded: usize,
    pub success_rate: f64,
    /// Mean response time of successful requests, in seconds.
    pub avg_response_time: f64,
}

#[derive(Debug)]
pub struct Session {
    pub config: SessionConfig,
    history: Vec<HistoryEntry>,
    results: BTreeMap<Scenario, Value>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
            results: BTreeMap::new(),
        }
    }

    /// Append one entry to the request log.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Overwrite the named result for a scenario with the latest raw outcome.
    pub fn store_result(&mut self, scenario: Scenario, value: Value) {
        self.results.insert(scenario, value);
    }

    pub fn result(&self, scenario: Scenario) -> Option<&Value> {
        self.results.get(&scenario)
    }

    pub fn results(&self) -> &BTreeMap<Scenario, Value> {
        &self.results
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Serialize the named-result bag, keyed by scenario slug.
    pub fn export_results(&self) -> Value {
        let mut map = Map::new();
        for (scenario, value) in &self.results {
            map.insert(scenario.slug().to_string(), value.clone());
        }
        Value::Object(map)
    }

    pub fn stats(&self) -> RequestStats {
        let total = self.history.len();
        let succeeded = self.history.iter().filter(|e| e.success).count();
        let success_rate = if total > 0 {
            succeeded as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let times: Vec<f64> = self
            .history
            .iter()
            .filter(|e| e.success)
            .filter_map(|e| e.response_time)
            .collect();
        let avg_response_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };

        RequestStats {
            total,
            succeeded,
            success_rate,
            avg_response_time,
        }
    }
}
