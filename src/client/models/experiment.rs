use crate::client::models::generation::RequestKind;

/// Entries of the experiment popup. Only background removal is wired to the backend;
/// the remaining slots are reserved and do nothing when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentAction {
    RemoveBackground,
    Unassigned(u8),
}

const ALL_ACTIONS: [ExperimentAction; 6] = [
    ExperimentAction::RemoveBackground,
    ExperimentAction::Unassigned(2),
    ExperimentAction::Unassigned(3),
    ExperimentAction::Unassigned(4),
    ExperimentAction::Unassigned(5),
    ExperimentAction::Unassigned(6),
];

impl ExperimentAction {
    pub fn all() -> &'static [ExperimentAction] {
        &ALL_ACTIONS
    }

    /// Backend request triggered by this action, if any.
    pub fn request_kind(&self) -> Option<RequestKind> {
        match self {
            ExperimentAction::RemoveBackground => Some(RequestKind::RemoveBackground),
            ExperimentAction::Unassigned(_) => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.request_kind().is_some()
    }
}

impl std::fmt::Display for ExperimentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentAction::RemoveBackground => write!(f, "Remove Background"),
            ExperimentAction::Unassigned(slot) => write!(f, "Option {}", slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_slot_is_assigned() {
        let assigned: Vec<_> = ExperimentAction::all().iter().filter(|a| a.is_assigned()).collect();
        assert_eq!(assigned, vec![&ExperimentAction::RemoveBackground]);
        assert_eq!(ExperimentAction::all().len(), 6);
        assert_eq!(ExperimentAction::Unassigned(4).to_string(), "Option 4");
    }
}
