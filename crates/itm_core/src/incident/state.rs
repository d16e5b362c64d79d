use crate::domain::{CommandKind, IncidentState};

/// The full lifecycle: `(from, command, to)`. Any pair not listed is rejected.
pub const TRANSITIONS: &[(IncidentState, CommandKind, IncidentState)] = &[
    (IncidentState::New, CommandKind::Investigate, IncidentState::InProgress),
    (IncidentState::New, CommandKind::Cancel, IncidentState::Canceled),
    (IncidentState::InProgress, CommandKind::Hold, IncidentState::OnHold),
    (IncidentState::InProgress, CommandKind::Resolve, IncidentState::Resolved),
    (IncidentState::InProgress, CommandKind::Cancel, IncidentState::Canceled),
    (IncidentState::OnHold, CommandKind::Reopen, IncidentState::InProgress),
    (IncidentState::OnHold, CommandKind::Resolve, IncidentState::Resolved),
    (IncidentState::OnHold, CommandKind::Cancel, IncidentState::Canceled),
    (IncidentState::Resolved, CommandKind::Confirm, IncidentState::Closed),
    (IncidentState::Resolved, CommandKind::Cancel, IncidentState::Canceled),
    (IncidentState::Resolved, CommandKind::Hold, IncidentState::OnHold),
    (IncidentState::Resolved, CommandKind::Reopen, IncidentState::InProgress),
    (IncidentState::Closed, CommandKind::Reopen, IncidentState::InProgress),
];

impl IncidentState {
    pub const INITIAL: IncidentState = IncidentState::New;

    pub fn next(self, kind: CommandKind) -> Option<IncidentState> {
        TRANSITIONS
            .iter()
            .find(|(from, k, _)| *from == self && *k == kind)
            .map(|(_, _, to)| *to)
    }

    pub fn accepts(self, kind: CommandKind) -> bool {
        self.next(kind).is_some()
    }

    /// Accepted command kinds in table order.
    pub fn accepted_kinds(self) -> Vec<CommandKind> {
        TRANSITIONS
            .iter()
            .filter(|(from, _, _)| *from == self)
            .map(|(_, k, _)| *k)
            .collect()
    }

    pub fn is_terminal(self) -> bool {
        !TRANSITIONS.iter().any(|(from, _, _)| *from == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_canceled_is_terminal() {
        let terminal: Vec<IncidentState> = IncidentState::ALL
            .iter()
            .copied()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![IncidentState::Canceled]);
    }

    #[test]
    fn table_has_no_duplicate_pairs() {
        for (i, (from, kind, _)) in TRANSITIONS.iter().enumerate() {
            let dupes = TRANSITIONS[i + 1..]
                .iter()
                .filter(|(f, k, _)| f == from && k == kind)
                .count();
            assert_eq!(dupes, 0, "duplicate transition {from} / {kind}");
        }
    }

    #[test]
    fn resolved_accepts_four_commands() {
        assert_eq!(
            IncidentState::Resolved.accepted_kinds(),
            vec![
                CommandKind::Confirm,
                CommandKind::Cancel,
                CommandKind::Hold,
                CommandKind::Reopen
            ]
        );
    }
}
