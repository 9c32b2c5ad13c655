//! Weekly goal list operations.
//!
//! Goals are append-only: records are never reordered, edited or
//! removed, and insertion order is display order. The only mutation is
//! flipping `done` from false to true.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single weekly goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal text
    pub goal: String,

    /// Whether the goal has been marked done
    #[serde(default)]
    pub done: bool,
}

/// Append a new pending goal. The text must be non-empty after
/// trimming; there is no dedup.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for empty text.
pub fn add(goals: &mut Vec<Goal>, text: &str) -> Result<(), ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::MissingField("goal".into()));
    }
    goals.push(Goal {
        goal: text.to_string(),
        done: false,
    });
    Ok(())
}

/// Mark the goal at `index` as done.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfBounds`] for an invalid index; the
/// list is left unchanged.
pub fn complete(goals: &mut [Goal], index: usize) -> Result<(), ValidationError> {
    let len = goals.len();
    let item = goals.get_mut(index).ok_or(ValidationError::OutOfBounds {
        collection: "weekly_goals".into(),
        index,
        len,
    })?;
    item.done = true;
    Ok(())
}

/// Render the goal list, one line per goal in insertion order. Done
/// goals are struck through.
pub fn render(goals: &[Goal]) -> String {
    let lines: Vec<String> = goals
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.done {
                format!("{i}. ✅ ~~{}~~", item.goal)
            } else {
                format!("{i}. - {}", item.goal)
            }
        })
        .collect();
    lines.join("\n")
}
