use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Unique, monotonically increasing task identifier (milliseconds-based).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty task text. Callers build one before asking for an ADD.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTaskText);
        }
        Ok(TaskText(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaskText::parse(&value)
    }
}

impl From<TaskText> for String {
    fn from(text: TaskText) -> Self {
        text.0
    }
}

/// A single to-do item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: TaskText,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: TaskText) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_text_is_trimmed() {
        assert_eq!(TaskText::parse("  buy milk \n").unwrap().as_str(), "buy milk");
    }

    #[test]
    fn test_task_text_rejects_whitespace() {
        assert_eq!(TaskText::parse(""), Err(ValidationError::EmptyTaskText));
        assert_eq!(TaskText::parse(" \t\n"), Err(ValidationError::EmptyTaskText));
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task::new(TaskId(1700000000000), TaskText::parse("buy milk").unwrap());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1700000000000i64, "text": "buy milk", "completed": false})
        );
    }

    #[test]
    fn test_blank_stored_text_is_rejected() {
        let blank = serde_json::from_str::<Task>(r#"{"id": 1, "text": "   "}"#);
        assert!(blank.is_err());

        let padded: Task = serde_json::from_str(r#"{"id": 2, "text": "  tea "}"#).unwrap();
        assert_eq!(padded.text.as_str(), "tea");
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"id": 5, "text": "x"}"#).unwrap();
        assert!(!task.completed);
        assert_eq!(task.id, TaskId(5));
    }
}
