use crate::models::{Task, TaskId, TaskText};

/// Every transition the task list knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a new, not yet completed task. The id is chosen by the caller
    /// (normally [`TaskIdGenerator`](super::TaskIdGenerator)).
    Add { id: TaskId, text: TaskText },
    /// Flip `completed` on matching tasks.
    Toggle(TaskId),
    /// Drop matching tasks.
    Remove(TaskId),
    /// Replace the whole list.
    Load(Vec<Task>),
}

impl TaskAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TaskAction::Add { .. } => "ADD",
            TaskAction::Toggle(_) => "TOGGLE",
            TaskAction::Remove(_) => "REMOVE",
            TaskAction::Load(_) => "LOAD",
        }
    }
}
