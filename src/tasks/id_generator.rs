use chrono::Utc;

use crate::models::TaskId;

/// Time-based ids that stay unique when several are requested within the
/// same millisecond (or the clock steps backwards): each id is
/// `max(now_millis, previous + 1)`. Once `previous` is `i64::MAX` the
/// sequence is exhausted and no further id is produced.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: Option<i64>,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `id` (e.g. one loaded from storage) is never handed out again.
    pub fn observe(&mut self, id: TaskId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    pub fn next_id(&mut self) -> Option<TaskId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> Option<TaskId> {
        let id = match self.last {
            Some(last) if now_millis <= last => last.checked_add(1)?,
            _ => now_millis,
        };
        self.last = Some(id);
        Some(TaskId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_millisecond_gets_distinct_ids() {
        let mut ids = TaskIdGenerator::new();
        assert_eq!(ids.next_at(1000), Some(TaskId(1000)));
        assert_eq!(ids.next_at(1000), Some(TaskId(1001)));
        assert_eq!(ids.next_at(1000), Some(TaskId(1002)));
        assert_eq!(ids.next_at(2000), Some(TaskId(2000)));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = TaskIdGenerator::new();
        ids.next_at(5000);
        assert_eq!(ids.next_at(4000), Some(TaskId(5001)));
    }

    #[test]
    fn test_observed_ids_are_not_reused() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(TaskId(9000));
        ids.observe(TaskId(3000));
        assert_eq!(ids.next_at(1000), Some(TaskId(9001)));
    }

    #[test]
    fn test_exhausted_sequence_yields_nothing() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(TaskId(i64::MAX - 1));
        assert_eq!(ids.next_at(1000), Some(TaskId(i64::MAX)));
        assert_eq!(ids.next_at(1000), None);
        assert_eq!(ids.next_at(1000), None);
    }

    #[test]
    fn test_rapid_real_ids_are_unique() {
        let mut ids = TaskIdGenerator::new();
        let generated: HashSet<_> = (0..1000).filter_map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
    }
}
