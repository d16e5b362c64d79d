use std::collections::HashSet;

use tracing::{debug, info};

use crate::command::Command;
use crate::domain::{Category, Priority};
use crate::error::{codes, AppError};
use crate::incident::Incident;
use crate::record::IncidentRecord;

/// Ordered collection of incidents that owns identifier allocation.
///
/// Identifiers come from `next_id`, which only moves forward. It is reset solely by
/// [`IncidentList::reset`]; a batch load advances it past the highest loaded identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentList {
    incidents: Vec<Incident>,
    next_id: i64,
}

impl IncidentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every incident and restart identifiers at zero.
    pub fn reset(&mut self) {
        self.incidents.clear();
        self.next_id = 0;
    }

    /// Identifier the next `create` will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn create(
        &mut self,
        caller: &str,
        category: Category,
        priority: Priority,
        name: &str,
        note: &str,
    ) -> Result<i64, AppError> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            AppError::new(
                codes::VALIDATION_INCIDENT_INVALID,
                "Incident identifiers are exhausted",
            )
            .with_details(format!("id={id}; field=id"))
        })?;
        let incident = Incident::new(id, caller, category, priority, name, note)?;
        self.next_id = next_id;
        self.incidents.push(incident);
        debug!(incident_id = id, category = %category, "created incident");
        Ok(id)
    }

    /// Append incidents rebuilt from persisted records.
    ///
    /// The batch is all-or-nothing: every record is converted and checked for duplicate
    /// identifiers (within the batch and against incidents already held) before anything is
    /// appended. Returns the number of incidents added.
    pub fn reconstruct_all(&mut self, records: &[IncidentRecord]) -> Result<usize, AppError> {
        let mut seen: HashSet<i64> = self.incidents.iter().map(Incident::id).collect();
        let mut rebuilt = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let incident = Incident::from_record(record).map_err(|e| {
                let details = e.details.clone().unwrap_or_default();
                e.with_details(format!("record={idx}; {details}"))
            })?;
            if !seen.insert(incident.id()) {
                return Err(AppError::new(
                    codes::LOAD_RECORD_INVALID,
                    "Duplicate incident id in load",
                )
                .with_details(format!("record={idx}; id={}", incident.id())));
            }
            rebuilt.push(incident);
        }

        if let Some(max_id) = rebuilt.iter().map(Incident::id).max() {
            let after_max = max_id.checked_add(1).ok_or_else(|| {
                AppError::new(
                    codes::LOAD_RECORD_INVALID,
                    "Incident id leaves no room for new incidents",
                )
                .with_details(format!("id={max_id}; field=id"))
            })?;
            self.next_id = self.next_id.max(after_max);
        }
        let added = rebuilt.len();
        self.incidents.extend(rebuilt);
        info!(added, next_id = self.next_id, "reconstructed incidents");
        Ok(added)
    }

    pub fn to_records(&self) -> Vec<IncidentRecord> {
        self.incidents.iter().map(Incident::to_record).collect()
    }

    pub fn by_id(&self, id: i64) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id() == id)
    }

    /// Incidents in `category`, in insertion order. An absent category is an `INVALID_ARGUMENT`.
    pub fn by_category(&self, category: Option<Category>) -> Result<Vec<&Incident>, AppError> {
        let Some(category) = category else {
            return Err(AppError::new(
                codes::INVALID_ARGUMENT,
                "Category is required to filter incidents",
            ));
        };
        Ok(self
            .incidents
            .iter()
            .filter(|i| i.category() == category)
            .collect())
    }

    /// Apply `command` to the incident with `id`.
    ///
    /// Returns `Ok(false)` without doing anything when no such incident exists, and
    /// `Ok(true)` once the transition has been applied.
    pub fn dispatch(&mut self, id: i64, command: &Command) -> Result<bool, AppError> {
        let Some(incident) = self.incidents.iter_mut().find(|i| i.id() == id) else {
            debug!(
                incident_id = id,
                command = %command.kind(),
                "dispatch to unknown incident ignored"
            );
            return Ok(false);
        };
        incident.update(command)?;
        Ok(true)
    }

    /// Remove the incident with `id`. Returns whether anything was removed.
    pub fn delete_by_id(&mut self, id: i64) -> bool {
        match self.incidents.iter().position(|i| i.id() == id) {
            Some(idx) => {
                self.incidents.remove(idx);
                debug!(incident_id = id, "deleted incident");
                true
            }
            None => false,
        }
    }
}
