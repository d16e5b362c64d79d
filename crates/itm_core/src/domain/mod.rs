use serde::{Deserialize, Serialize};

/// Declares a fieldless enum together with its human-readable label table.
///
/// The label is the persisted and displayed form ("Awaiting Caller", "In Progress", ...), so the
/// generated `label`/`from_label` pair is the only place a variant and its text are related.
/// Unknown labels map to `None`; callers decide whether that is an error.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labeled_enum! {
    /// Area of the service desk an incident belongs to.
    pub enum Category {
        Inquiry => "Inquiry",
        Software => "Software",
        Hardware => "Hardware",
        Network => "Network",
        Database => "Database",
    }
}

labeled_enum! {
    pub enum Priority {
        Urgent => "Urgent",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

labeled_enum! {
    /// Why an incident is paused.
    pub enum OnHoldReason {
        AwaitingCaller => "Awaiting Caller",
        AwaitingChange => "Awaiting Change",
        AwaitingVendor => "Awaiting Vendor",
    }
}

labeled_enum! {
    /// How an incident was fixed.
    pub enum ResolutionCode {
        PermanentlySolved => "Permanently Solved",
        Workaround => "Workaround",
        NotSolved => "Not Solved",
        CallerClosed => "Caller Closed",
    }
}

labeled_enum! {
    /// Why an incident was abandoned.
    pub enum CancellationCode {
        Duplicate => "Duplicate",
        Unnecessary => "Unnecessary",
        NotAnIncident => "Not an Incident",
    }
}

labeled_enum! {
    /// User actions that may move an incident to another state.
    pub enum CommandKind {
        Investigate => "Investigate",
        Hold => "Hold",
        Resolve => "Resolve",
        Confirm => "Confirm",
        Reopen => "Reopen",
        Cancel => "Cancel",
    }
}

labeled_enum! {
    /// Lifecycle state of an incident. Transitions live in `crate::incident::state`.
    pub enum IncidentState {
        New => "New",
        InProgress => "In Progress",
        OnHold => "On Hold",
        Resolved => "Resolved",
        Closed => "Closed",
        Canceled => "Canceled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_in_both_directions() {
        for s in IncidentState::ALL {
            assert_eq!(IncidentState::from_label(s.label()), Some(*s));
        }
        for r in OnHoldReason::ALL {
            assert_eq!(OnHoldReason::from_label(r.label()), Some(*r));
        }
        assert_eq!(
            CancellationCode::from_label("Not an Incident"),
            Some(CancellationCode::NotAnIncident)
        );
    }

    #[test]
    fn unknown_and_case_mismatched_labels_are_rejected() {
        assert_eq!(Category::from_label("network"), None);
        assert_eq!(Priority::from_label(""), None);
        assert_eq!(ResolutionCode::from_label("Solved"), None);
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&OnHoldReason::AwaitingChange).unwrap();
        assert_eq!(json, "\"Awaiting Change\"");
        let state: IncidentState = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(state, IncidentState::InProgress);
    }
}
