use crate::tasks::TaskRecord;
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory task list with add/remove semantics.
///
/// The store is the source of truth for the running process; persistence is
/// best-effort and handled by the caller after each mutation. Ids come from
/// the wall clock in epoch milliseconds, clamped to stay strictly above the
/// last issued or loaded id so that two adds within one millisecond still
/// get distinct values.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<TaskRecord>,
    last_id: i64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replaces the list with a previously persisted one.
    ///
    /// Advances the id watermark past the largest loaded id so that records
    /// added after a restart cannot collide with loaded ones even if the
    /// clock reads low.
    pub fn replace(&mut self, tasks: Vec<TaskRecord>) {
        self.last_id = tasks
            .iter()
            .map(|task| task.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        self.tasks = tasks;
    }

    /// Appends a new record, or rejects the input silently.
    ///
    /// Both fields are trimmed; if either trims to empty the call is a
    /// no-op and returns `false`. Returns `true` when a record was appended,
    /// which is the caller's cue to persist.
    pub fn add(&mut self, title: &str, due_date: &str) -> bool {
        let title = title.trim();
        let due_date = due_date.trim();
        if title.is_empty() || due_date.is_empty() {
            return false;
        }

        let id = self.next_id();
        self.tasks.push(TaskRecord {
            id,
            title: title.to_string(),
            due_date: due_date.to_string(),
        });
        true
    }

    /// Removes the record with the given id, if present.
    ///
    /// Relative order of the remaining records is preserved. A miss is a
    /// no-op; either way the caller re-persists the list, matching the
    /// save-on-change behavior of the original filter.
    pub fn remove(&mut self, id: i64) {
        self.tasks.retain(|task| task.id != id);
    }

    fn next_id(&mut self) -> i64 {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis() as i64)
            .unwrap_or(0);
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::tasks::{decode_tasks, encode_tasks};
    use std::collections::HashSet;

    #[test]
    fn accepted_adds_append_in_call_order() {
        let mut store = TaskStore::new();
        assert!(store.add("first", "2025-01-01"));
        assert!(store.add("second", "2025-01-02"));
        assert!(store.add("third", "2025-01-03"));

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn add_trims_title_and_due_date() {
        let mut store = TaskStore::new();
        assert!(store.add("  feed cat  ", " 2025-02-01 "));

        let task = &store.tasks()[0];
        assert_eq!(task.title, "feed cat");
        assert_eq!(task.due_date, "2025-02-01");
    }

    #[test]
    fn blank_inputs_are_rejected_without_error() {
        let mut store = TaskStore::new();
        assert!(!store.add("", "2025-01-01"));
        assert!(!store.add("x", ""));
        assert!(!store.add("  ", "  "));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut store = TaskStore::new();
        store.add("a", "2025-01-01");
        store.add("b", "2025-01-02");
        store.add("c", "2025-01-03");

        let middle_id = store.tasks()[1].id;
        store.remove(middle_id);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let mut store = TaskStore::new();
        store.add("only", "2025-01-01");
        let before = store.tasks().to_vec();

        store.remove(-42);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn sequential_adds_issue_distinct_ids() {
        let mut store = TaskStore::new();
        for n in 0..50 {
            assert!(store.add(&format!("task {n}"), "2025-06-01"));
        }

        let ids: HashSet<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut store = TaskStore::new();
        for n in 0..10 {
            store.add(&format!("task {n}"), "2025-06-01");
        }

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn replace_advances_id_watermark_past_loaded_ids() {
        let mut store = TaskStore::new();
        store.add("seed", "2025-01-01");

        let far_future_id = i64::MAX - 10;
        let mut loaded = store.tasks().to_vec();
        loaded[0].id = far_future_id;
        store.replace(loaded);

        assert!(store.add("after restart", "2025-01-02"));
        assert!(store.tasks()[1].id > far_future_id);
    }

    #[test]
    fn buy_milk_scenario() {
        let mut store = TaskStore::new();
        assert!(store.add("Buy milk", "2025-03-01"));
        assert!(store.add("Call mom", "2025-03-02"));

        let milk_id = store.tasks()[0].id;
        store.remove(milk_id);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Call mom");
        assert_eq!(store.tasks()[0].due_date, "2025-03-02");
    }

    #[test]
    fn encode_decode_restart_reconstructs_equal_list() {
        let mut store = TaskStore::new();
        store.add("pack bags", "2025-04-01");
        store.add("book train", "2025-04-02");

        let value = encode_tasks(store.tasks()).expect("encoding should succeed");

        let mut restarted = TaskStore::new();
        restarted.replace(decode_tasks(&value).expect("decoding should succeed"));
        assert_eq!(restarted.tasks(), store.tasks());
    }
}
