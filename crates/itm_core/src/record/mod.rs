use serde::{Deserialize, Serialize};

/// Flat, label-based form of an incident as it crosses the persistence boundary.
///
/// All enum-valued fields hold human-readable labels ("Network", "Awaiting Caller", ...).
/// Nothing here is validated; `Incident::from_record` owns that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentRecord {
    pub id: i64,
    pub caller: String,
    pub category: String,
    pub priority: String,
    pub name: String,
    pub owner: Option<String>,
    pub change_request: Option<String>,
    pub on_hold_reason: Option<String>,
    pub resolution_code: Option<String>,
    pub cancellation_code: Option<String>,
    pub state: String,
    #[serde(default)]
    pub notes: Vec<String>,
}
