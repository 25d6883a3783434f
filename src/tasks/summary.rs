use crate::models::Task;

/// Counts derived from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        TaskSummary {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Which tasks a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskId, TaskText};

    fn task(id: i64, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: TaskText::parse(&format!("task {}", id)).unwrap(),
            completed,
        }
    }

    #[test]
    fn test_summary_counts() {
        let tasks = vec![task(1, false), task(2, true), task(3, false)];
        assert_eq!(
            TaskSummary::of(&tasks),
            TaskSummary {
                total: 3,
                active: 2,
                completed: 1
            }
        );
        assert_eq!(TaskSummary::of(&[]), TaskSummary::default());
    }

    #[test]
    fn test_filters() {
        let open = task(1, false);
        let done = task(2, true);
        assert!(TaskFilter::All.matches(&open) && TaskFilter::All.matches(&done));
        assert!(TaskFilter::Active.matches(&open) && !TaskFilter::Active.matches(&done));
        assert!(!TaskFilter::Completed.matches(&open) && TaskFilter::Completed.matches(&done));
    }
}
