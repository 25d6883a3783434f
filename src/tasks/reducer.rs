use super::TaskAction;
use crate::models::Task;

/// Pure transition over the task list.
///
/// TOGGLE touches every task carrying the id, so a list with duplicate ids
/// (only reachable through LOAD) flips all of them.
pub fn reduce(mut tasks: Vec<Task>, action: TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Add { id, text } => {
            tasks.push(Task::new(id, text));
            tasks
        }
        TaskAction::Toggle(id) => {
            for task in tasks.iter_mut().filter(|t| t.id == id) {
                task.completed = !task.completed;
            }
            tasks
        }
        TaskAction::Remove(id) => {
            tasks.retain(|t| t.id != id);
            tasks
        }
        TaskAction::Load(loaded) => loaded,
    }
}
