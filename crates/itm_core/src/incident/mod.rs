pub mod state;

use tracing::{debug, warn};

use crate::command::Command;
use crate::domain::{
    CancellationCode, Category, CommandKind, IncidentState, OnHoldReason, Priority,
    ResolutionCode,
};
use crate::error::{codes, AppError};
use crate::record::IncidentRecord;

/// Printed after every note by [`Incident::notes_string`].
pub const NOTES_SEPARATOR: &str = "\n-------\n";

/// A tracked support incident and its lifecycle state.
///
/// Fields change only through [`Incident::update`], which keeps them consistent with the state:
/// - `on_hold_reason` is set only while On Hold.
/// - `resolution_code` is set only while Resolved or Closed.
/// - `cancellation_code` is set only once Canceled.
/// - `notes` is append-only and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    id: i64,
    caller: String,
    category: Category,
    priority: Priority,
    name: String,
    owner: Option<String>,
    change_request: Option<String>,
    on_hold_reason: Option<OnHoldReason>,
    resolution_code: Option<ResolutionCode>,
    cancellation_code: Option<CancellationCode>,
    notes: Vec<String>,
    state: IncidentState,
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::new(
            codes::VALIDATION_INCIDENT_INVALID,
            format!("Incident {field} is required"),
        ));
    }
    Ok(value)
}

fn load_error(record: &IncidentRecord, message: impl Into<String>, details: String) -> AppError {
    AppError::new(codes::LOAD_RECORD_INVALID, message)
        .with_details(format!("id={}; {details}", record.id))
}

fn required_label<T>(
    record: &IncidentRecord,
    field: &str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    parse(value).ok_or_else(|| {
        load_error(
            record,
            format!("Unrecognized {field}"),
            format!("field={field}; value={value}"),
        )
    })
}

/// Absent and blank labels both mean "no value"; anything else must be a known label.
fn optional_label<T>(
    record: &IncidentRecord,
    field: &str,
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_label(record, field, v, parse).map(Some),
    }
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

impl Incident {
    /// Create a fresh incident in the New state. The caller supplies the identifier.
    pub fn new(
        id: i64,
        caller: impl Into<String>,
        category: Category,
        priority: Priority,
        name: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, AppError> {
        let caller = required("caller", caller.into())?;
        let name = required("name", name.into())?;
        let note = required("note", note.into())?;

        Ok(Self {
            id,
            caller,
            category,
            priority,
            name,
            owner: None,
            change_request: None,
            on_hold_reason: None,
            resolution_code: None,
            cancellation_code: None,
            notes: vec![note],
            state: IncidentState::INITIAL,
        })
    }

    /// Rebuild an incident from its persisted record without replaying its history.
    ///
    /// Every label must be known, and the reason fields must agree with the recorded state
    /// the same way `update` would have left them. Anything else is a `LOAD_RECORD_INVALID`.
    pub fn from_record(record: &IncidentRecord) -> Result<Self, AppError> {
        if record.caller.trim().is_empty() {
            return Err(load_error(record, "Caller is required", "field=caller".to_string()));
        }
        if record.name.trim().is_empty() {
            return Err(load_error(record, "Name is required", "field=name".to_string()));
        }
        if record.notes.is_empty() {
            return Err(load_error(
                record,
                "At least one note is required",
                "field=notes".to_string(),
            ));
        }

        let category = required_label(record, "category", &record.category, Category::from_label)?;
        let priority = required_label(record, "priority", &record.priority, Priority::from_label)?;
        let state = required_label(record, "state", &record.state, IncidentState::from_label)?;
        let on_hold_reason = optional_label(
            record,
            "on_hold_reason",
            record.on_hold_reason.as_deref(),
            OnHoldReason::from_label,
        )?;
        let resolution_code = optional_label(
            record,
            "resolution_code",
            record.resolution_code.as_deref(),
            ResolutionCode::from_label,
        )?;
        let cancellation_code = optional_label(
            record,
            "cancellation_code",
            record.cancellation_code.as_deref(),
            CancellationCode::from_label,
        )?;

        for (field, present, expected) in [
            (
                "on_hold_reason",
                on_hold_reason.is_some(),
                state == IncidentState::OnHold,
            ),
            (
                "resolution_code",
                resolution_code.is_some(),
                matches!(state, IncidentState::Resolved | IncidentState::Closed),
            ),
            (
                "cancellation_code",
                cancellation_code.is_some(),
                state == IncidentState::Canceled,
            ),
        ] {
            if present != expected {
                let verb = if present { "must not be set" } else { "is required" };
                return Err(load_error(
                    record,
                    format!("{field} {verb} in state {state}"),
                    format!("field={field}; state={state}"),
                ));
            }
        }

        Ok(Self {
            id: record.id,
            caller: record.caller.clone(),
            category,
            priority,
            name: record.name.clone(),
            owner: optional_text(&record.owner),
            change_request: optional_text(&record.change_request),
            on_hold_reason,
            resolution_code,
            cancellation_code,
            notes: record.notes.clone(),
            state,
        })
    }

    pub fn to_record(&self) -> IncidentRecord {
        IncidentRecord {
            id: self.id,
            caller: self.caller.clone(),
            category: self.category.label().to_string(),
            priority: self.priority.label().to_string(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            change_request: self.change_request.clone(),
            on_hold_reason: self.on_hold_reason.map(|r| r.label().to_string()),
            resolution_code: self.resolution_code.map(|c| c.label().to_string()),
            cancellation_code: self.cancellation_code.map(|c| c.label().to_string()),
            state: self.state.label().to_string(),
            notes: self.notes.clone(),
        }
    }

    /// Apply `command` if the current state accepts it.
    ///
    /// On rejection nothing changes and a `TRANSITION_UNSUPPORTED` error is returned.
    /// On success the state advances, the command's note is appended, and reason fields left
    /// over from the previous state are cleared.
    pub fn update(&mut self, command: &Command) -> Result<(), AppError> {
        let kind = command.kind();
        let Some(next) = self.state.next(kind) else {
            warn!(
                incident_id = self.id,
                state = %self.state,
                command = %kind,
                "rejected transition"
            );
            return Err(AppError::new(
                codes::TRANSITION_UNSUPPORTED,
                format!("{kind} is not allowed while the incident is {}", self.state),
            )
            .with_details(format!("id={}; state={}; command={kind}", self.id, self.state)));
        };

        let awaiting_change = self.on_hold_reason == Some(OnHoldReason::AwaitingChange);
        match kind {
            CommandKind::Investigate => {
                self.owner = command.owner_id().map(str::to_string);
            }
            CommandKind::Hold => {
                self.on_hold_reason = command.on_hold_reason();
                self.resolution_code = None;
            }
            CommandKind::Resolve => {
                self.resolution_code = command.resolution_code();
                if awaiting_change {
                    self.change_request = Some(command.note().to_string());
                }
                self.on_hold_reason = None;
            }
            CommandKind::Confirm => {}
            CommandKind::Reopen => {
                if awaiting_change {
                    self.change_request = Some(command.note().to_string());
                }
                self.on_hold_reason = None;
                self.resolution_code = None;
                self.cancellation_code = None;
            }
            CommandKind::Cancel => {
                self.cancellation_code = command.cancellation_code();
                self.resolution_code = None;
                self.on_hold_reason = None;
            }
        }

        debug!(
            incident_id = self.id,
            from = %self.state,
            to = %next,
            command = %kind,
            "applied transition"
        );
        self.notes.push(command.note().to_string());
        self.state = next;
        Ok(())
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn change_request(&self) -> Option<&str> {
        self.change_request.as_deref()
    }

    pub fn on_hold_reason(&self) -> Option<OnHoldReason> {
        self.on_hold_reason
    }

    pub fn resolution_code(&self) -> Option<ResolutionCode> {
        self.resolution_code
    }

    pub fn cancellation_code(&self) -> Option<CancellationCode> {
        self.cancellation_code
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn state(&self) -> IncidentState {
        self.state
    }

    /// All notes for a detail view, each followed by [`NOTES_SEPARATOR`].
    pub fn notes_string(&self) -> String {
        self.notes
            .iter()
            .map(|n| format!("{n}{NOTES_SEPARATOR}"))
            .collect()
    }
}
