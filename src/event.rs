use crate::tasks::TaskRecord;

/// Events delivered from storage workers back to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Result of the startup load; an absent slot arrives as an empty list.
    TasksLoaded(Vec<TaskRecord>),
    /// A best-effort read or write failed; logged, never fatal.
    StorageError(String),
}
