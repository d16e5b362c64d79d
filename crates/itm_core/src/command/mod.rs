use serde::{Deserialize, Serialize};

use crate::domain::{CancellationCode, CommandKind, OnHoldReason, ResolutionCode};
use crate::error::{codes, AppError};

/// Unvalidated command input, e.g. straight from a form or an RPC payload.
///
/// Every field is optional so that a missing kind or payload surfaces as a validation error
/// from [`Command::new`] instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandRequest {
    pub kind: Option<CommandKind>,
    pub owner_id: Option<String>,
    pub on_hold_reason: Option<OnHoldReason>,
    pub resolution_code: Option<ResolutionCode>,
    pub cancellation_code: Option<CancellationCode>,
    pub note: Option<String>,
}

/// A validated request to move an incident through its lifecycle.
///
/// The payload field matching `kind` is guaranteed present and the note is never empty.
/// Payload fields belonging to other kinds may be carried along; they are ignored on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    owner_id: Option<String>,
    on_hold_reason: Option<OnHoldReason>,
    resolution_code: Option<ResolutionCode>,
    cancellation_code: Option<CancellationCode>,
    note: String,
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::new(codes::VALIDATION_COMMAND_INVALID, message)
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

impl Command {
    pub fn new(request: CommandRequest) -> Result<Self, AppError> {
        let Some(kind) = request.kind else {
            return Err(invalid("Command kind is required"));
        };

        match kind {
            CommandKind::Investigate if !non_blank(request.owner_id.as_deref()) => {
                return Err(invalid("Investigate requires an owner id"));
            }
            CommandKind::Hold if request.on_hold_reason.is_none() => {
                return Err(invalid("Hold requires an on-hold reason"));
            }
            CommandKind::Resolve if request.resolution_code.is_none() => {
                return Err(invalid("Resolve requires a resolution code"));
            }
            CommandKind::Cancel if request.cancellation_code.is_none() => {
                return Err(invalid("Cancel requires a cancellation code"));
            }
            _ => {}
        }

        let note = match request.note {
            Some(note) if !note.trim().is_empty() => note,
            _ => {
                return Err(invalid("Command note is required")
                    .with_details(format!("command={kind}")));
            }
        };

        Ok(Self {
            kind,
            owner_id: request.owner_id,
            on_hold_reason: request.on_hold_reason,
            resolution_code: request.resolution_code,
            cancellation_code: request.cancellation_code,
            note,
        })
    }

    pub fn investigate(
        owner_id: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Investigate),
            owner_id: Some(owner_id.into()),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn hold(reason: OnHoldReason, note: impl Into<String>) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Hold),
            on_hold_reason: Some(reason),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn resolve(code: ResolutionCode, note: impl Into<String>) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Resolve),
            resolution_code: Some(code),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn confirm(note: impl Into<String>) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Confirm),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn reopen(note: impl Into<String>) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Reopen),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn cancel(code: CancellationCode, note: impl Into<String>) -> Result<Self, AppError> {
        Self::new(CommandRequest {
            kind: Some(CommandKind::Cancel),
            cancellation_code: Some(code),
            note: Some(note.into()),
            ..CommandRequest::default()
        })
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
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

    pub fn note(&self) -> &str {
        &self.note
    }
}
