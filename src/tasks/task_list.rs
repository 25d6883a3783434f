//! The persisted task list. Every transition goes through [`reduce`] and is
//! written back to storage before observers are notified.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use tracing::{debug, error, info, warn};

use super::{reduce, TaskAction, TaskFilter, TaskIdGenerator, TaskSummary};
use crate::models::{Task, TaskId, TaskText};
use crate::storage::Storage;
use crate::utils::observers::{Observers, SubscriptionId};

pub struct TaskListModel {
    tasks: Vec<Task>,
    storage: Arc<dyn Storage>,
    storage_key: String,
    ids: TaskIdGenerator,
    summary: OnceLock<TaskSummary>,
    observers: Observers<Vec<Task>>,
}

/// Absent or unparseable payloads both mean "no tasks yet".
fn read_persisted(storage: &dyn Storage, key: &str) -> Vec<Task> {
    let Some(raw) = storage.get(key) else {
        debug!("No persisted tasks under '{}'", key);
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("Persisted tasks under '{}' are unreadable, starting empty: {}", key, e);
            Vec::new()
        }
    }
}

impl TaskListModel {
    /// Startup path: LOAD whatever is persisted under `storage_key`.
    pub fn load_from_storage(storage: Arc<dyn Storage>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let persisted = read_persisted(storage.as_ref(), &storage_key);
        let mut model = TaskListModel {
            tasks: Vec::new(),
            storage,
            storage_key,
            ids: TaskIdGenerator::new(),
            summary: OnceLock::new(),
            observers: Observers::default(),
        };
        model.apply(TaskAction::Load(persisted));
        info!("Loaded {} task(s)", model.tasks.len());
        model
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task with a fresh id and returns that id.
    pub fn add(&mut self, text: TaskText) -> TaskId {
        let id = self.ids.next_id().unwrap_or_else(|| self.unused_id());
        self.dispatch(TaskAction::Add { id, text });
        id
    }

    pub fn toggle(&mut self, id: TaskId) {
        self.dispatch(TaskAction::Toggle(id));
    }

    pub fn remove(&mut self, id: TaskId) {
        self.dispatch(TaskAction::Remove(id));
    }

    pub fn load(&mut self, tasks: Vec<Task>) {
        self.dispatch(TaskAction::Load(tasks));
    }

    /// Apply an action, persist the result and notify observers.
    fn dispatch(&mut self, action: TaskAction) {
        debug!("Dispatching {}", action.name());
        self.apply(action);
        self.persist();
        self.observers.notify(&self.tasks);
    }

    /// Counts over the current list, computed once per transition.
    pub fn summary(&self) -> TaskSummary {
        *self.summary.get_or_init(|| TaskSummary::of(&self.tasks))
    }

    pub fn visible(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Vec<Task>) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn apply(&mut self, action: TaskAction) {
        match &action {
            TaskAction::Add { id, .. } => self.ids.observe(*id),
            TaskAction::Load(loaded) => {
                warn_on_duplicate_ids(loaded);
                for task in loaded {
                    self.ids.observe(task.id);
                }
            }
            TaskAction::Toggle(_) | TaskAction::Remove(_) => {}
        }
        let current = std::mem::take(&mut self.tasks);
        self.tasks = reduce(current, action);
        self.summary = OnceLock::new();
    }

    /// Lowest id not carried by any current task. Only used once the stored
    /// ids have run the generator up to `i64::MAX`.
    fn unused_id(&self) -> TaskId {
        let taken: HashSet<i64> = self.tasks.iter().map(|t| t.id.0).collect();
        let upper = i64::try_from(self.tasks.len()).unwrap_or(i64::MAX);
        let id = (0..=upper).find(|id| !taken.contains(id)).unwrap_or(upper);
        warn!("Task id sequence exhausted, reusing free id {}", id);
        TaskId(id)
    }

    fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(body) => self.storage.set(&self.storage_key, &body),
            Err(e) => error!("Could not serialize tasks: {}", e),
        }
    }
}

fn warn_on_duplicate_ids(tasks: &[Task]) {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id) {
            warn!("Loaded task list contains duplicate id {}", task.id);
        }
    }
}
