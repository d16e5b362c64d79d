use serde::{Deserialize, Serialize};

use crate::incident::Incident;

pub const COLUMNS: usize = 5;
pub const ID_INDEX: usize = 0;
pub const CATEGORY_INDEX: usize = 1;
pub const STATE_INDEX: usize = 2;
pub const PRIORITY_INDEX: usize = 3;
pub const NAME_INDEX: usize = 4;

/// One line of the incident table: id, category, state, priority, name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentRow {
    pub id: i64,
    pub category: String,
    pub state: String,
    pub priority: String,
    pub name: String,
}

impl IncidentRow {
    pub fn from_incident(incident: &Incident) -> Self {
        Self {
            id: incident.id(),
            category: incident.category().label().to_string(),
            state: incident.state().label().to_string(),
            priority: incident.priority().label().to_string(),
            name: incident.name().to_string(),
        }
    }

    /// Cells in column order, for grid widgets that want plain strings.
    pub fn to_columns(&self) -> [String; COLUMNS] {
        let mut cols: [String; COLUMNS] = Default::default();
        cols[ID_INDEX] = self.id.to_string();
        cols[CATEGORY_INDEX] = self.category.clone();
        cols[STATE_INDEX] = self.state.clone();
        cols[PRIORITY_INDEX] = self.priority.clone();
        cols[NAME_INDEX] = self.name.clone();
        cols
    }
}

pub fn rows<'a>(incidents: impl IntoIterator<Item = &'a Incident>) -> Vec<IncidentRow> {
    incidents.into_iter().map(IncidentRow::from_incident).collect()
}
