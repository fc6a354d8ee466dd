//! Actions selectable from the command line and their ordering rules.
//!
//! Pure functions only — no I/O, no async.

use std::fmt;

/// One of the three operations the tool can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Copy source files into the target directory (`-p`).
    Deploy,
    /// Restart the service unit (`-r`).
    Restart,
    /// Follow the unit's journal (`-l`).
    Monitor,
}

impl Action {
    /// Every action, in flag-declaration order.
    pub const ALL: [Action; 3] = [Action::Deploy, Action::Restart, Action::Monitor];

    /// Map a short flag character to its action.
    #[must_use]
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'p' => Some(Self::Deploy),
            'r' => Some(Self::Restart),
            'l' => Some(Self::Monitor),
            _ => None,
        }
    }

    /// Short flag character that selects this action.
    #[must_use]
    pub fn flag(self) -> char {
        match self {
            Self::Deploy => 'p',
            Self::Restart => 'r',
            Self::Monitor => 'l',
        }
    }

    /// Human-readable name used in progress output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Restart => "restart",
            Self::Monitor => "monitor",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order selected actions by their position on the command line.
///
/// `occurrences` pairs each action with the argument index it was seen at.
/// An action listed more than once runs once, at its earliest position.
#[must_use]
pub fn order_actions(occurrences: &[(Action, usize)]) -> Vec<Action> {
    let mut sorted = occurrences.to_vec();
    sorted.sort_by_key(|&(_, index)| index);

    let mut ordered = Vec::with_capacity(Action::ALL.len());
    for (action, _) in sorted {
        if !ordered.contains(&action) {
            ordered.push(action);
        }
    }
    ordered
}
