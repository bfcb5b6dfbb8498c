// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan findings as returned by the scanning service.
//!
//! Findings are opaque JSON records. The only fields looked at are the plugin
//! identifier and the risk level, used to label a finding for display.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown when a finding has no usable value for a field.
pub const MISSING_FIELD: &str = "N/A";

const PLUGIN_ID_KEYS: [&str; 2] = ["Plugin ID", "plugin_id"];
const RISK_KEYS: [&str; 2] = ["Risk", "risk"];

/// One vulnerability record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Finding(Value);

impl Finding {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn plugin_id(&self) -> String {
        self.lookup(&PLUGIN_ID_KEYS)
    }

    pub fn risk(&self) -> String {
        self.lookup(&RISK_KEYS)
    }

    /// One-line summary used as a panel header.
    pub fn label(&self) -> String {
        format!("Plugin ID: {} | Risk: {}", self.plugin_id(), self.risk())
    }

    /// Indented JSON for the expanded panel body.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// First key with a truthy value wins, falling back to [`MISSING_FIELD`].
    fn lookup(&self, keys: &[&str]) -> String {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| is_truthy(value))
            .map(display_value)
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }
}

impl From<Value> for Finding {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Initial scan results: finding key to finding, in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResults(Map<String, Value>);

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, finding: Finding) {
        self.0.insert(key.into(), finding.0);
    }

    pub fn get(&self, key: &str) -> Option<Finding> {
        self.0.get(key).cloned().map(Finding)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Finding)> {
        self.0.iter().map(|(k, v)| (k.as_str(), Finding(v.clone())))
    }
}

impl From<Map<String, Value>> for ScanResults {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Advanced scan results, in service order.
pub type AdvancedResults = Vec<Finding>;
