use colored::*;
use friendpath_core::{ConnectionOutcome, NodeId};

/// What a piece of terminal output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Username,
    UserId,
    Url,
    StepNumber,
    Number,
    Stats,
    Found,
    NotFound,
    TimedOut,
    Error,
}

pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            enabled: use_colors,
        }
    }

    pub fn paint(&self, text: &str, role: Role) -> ColoredString {
        if !self.enabled {
            return text.normal();
        }

        match role {
            Role::Username => text.yellow(),
            Role::UserId => text.dimmed(),
            Role::Url => text.underline(),
            Role::StepNumber | Role::Stats => text.blue(),
            Role::Number | Role::Found => text.green(),
            Role::NotFound => text.red(),
            Role::TimedOut => text.magenta(),
            Role::Error => text.red().bold(),
        }
    }

    /// Quoted so names with underscores stay readable in the path flow.
    pub fn username(&self, name: &str) -> ColoredString {
        self.paint(&format!("\"{}\"", name), Role::Username)
    }

    pub fn user_id(&self, user_id: NodeId) -> ColoredString {
        self.paint(&format!("[{}]", user_id), Role::UserId)
    }

    pub fn number(&self, text: &str) -> ColoredString {
        self.paint(text, Role::Number)
    }

    pub fn outcome_banner(&self, outcome: &ConnectionOutcome) -> ColoredString {
        match outcome {
            ConnectionOutcome::Found { .. } => self.paint("✅", Role::Found),
            ConnectionOutcome::NotFound { .. } => {
                self.paint("❌ No connection found between", Role::NotFound)
            }
            ConnectionOutcome::TimedOut { .. } => {
                self.paint("⏱️ Search timed out before connecting", Role::TimedOut)
            }
        }
    }
}
