use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TARGET: u64 = 10;

/// The single persisted unit of state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub count: u64,
    /// Daily goal; 0 means unset.
    pub target: u64,
    pub last_visited_date: Option<NaiveDate>,
    /// Archived counts of past days. Never holds today.
    pub history: BTreeMap<NaiveDate, u64>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TARGET,
            last_visited_date: None,
            history: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub value: serde_json::Value,
}

impl TargetRequest {
    /// Raw user input as the target field would hold it.
    pub fn raw(&self) -> String {
        match &self.value {
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Number(number) => number.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: String,
    pub display_date: String,
    pub count: u64,
    pub target: u64,
    pub remaining: Option<i64>,
    pub goal_reached: bool,
    pub can_decrement: bool,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TargetResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub snapshot: Snapshot,
}
