//! Commands accepted at the action prompt.

use std::fmt;
use std::str::FromStr;

/// One command typed at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    /// Every action, in the order the prompt lists them.
    pub const ALL: [Action; 9] = [
        Action::Add,
        Action::Remove,
        Action::Import,
        Action::Export,
        Action::Ask,
        Action::Exit,
        Action::Log,
        Action::HardestCard,
        Action::ResetStats,
    ];

    /// The word typed to select this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Import => "import",
            Action::Export => "export",
            Action::Ask => "ask",
            Action::Exit => "exit",
            Action::Log => "log",
            Action::HardestCard => "hardest card",
            Action::ResetStats => "reset stats",
        }
    }

    /// The prompt printed before every command.
    #[must_use]
    pub fn prompt() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(Action::as_str).collect();
        format!("Input the action ({}):", names.join(", "))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that names no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
