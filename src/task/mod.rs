/// Filter projections over a task sequence
pub mod filter;

use serde::{Deserialize, Serialize};

/// Represents one to-do item
///
/// Tasks carry no identity beyond their position in the owning sequence;
/// the serialized form is exactly `{"text": ..., "completed": ...}` so a
/// sequence persisted by any conforming implementation round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The user-visible content; non-empty after trimming
    pub text: String,

    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    /// Create a new pending task with trimmed text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replace the task text (caller guarantees the trimmed text is non-empty)
    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }
}

/// Which subset of the task sequence a view should show
///
/// Process-wide UI state; defaults to `All` at startup and is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task
    #[default]
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks
    Completed,
}

impl FilterMode {
    /// Whether a task belongs to this filter's subset
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }
}
