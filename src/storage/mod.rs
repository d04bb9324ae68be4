use crate::event::AppEvent;
use crate::tasks::{decode_tasks, encode_tasks, TaskRecord, TASKS_SLOT_KEY};
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_storage_dir() -> PathBuf {
    home_dir().join(".mocha").join("storage")
}

/// Named key-value slots in local storage. Both operations are best-effort
/// from the app's point of view; an absent slot is `Ok(None)`, not an error.
pub trait SlotStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// One JSON file per slot under a per-user directory.
pub struct FileSlotStorage {
    root: PathBuf,
}

impl FileSlotStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn default_location() -> Self {
        Self::new(default_storage_dir())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn ensure_root(&self) -> Result<(), String> {
        fs::create_dir_all(&self.root).map_err(|err| {
            format!(
                "failed to initialize storage directory {}: {err}",
                self.root.display()
            )
        })
    }
}

impl SlotStorage for FileSlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|err| format!("failed to read {}: {err}", path.display()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.ensure_root()?;
        let final_path = self.slot_path(key);
        let tmp_path = self.root.join(format!("{key}.json.tmp"));

        fs::write(&tmp_path, value)
            .map_err(|err| format!("failed to write {}: {err}", tmp_path.display()))?;

        match fs::rename(&tmp_path, &final_path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // Some platforms refuse to rename over an existing file.
                if final_path.exists() {
                    fs::remove_file(&final_path).map_err(|err| {
                        format!("failed to replace {}: {err}", final_path.display())
                    })?;
                    fs::rename(&tmp_path, &final_path).map_err(|err| {
                        format!("failed to replace {}: {err}", final_path.display())
                    })
                } else {
                    Err(format!(
                        "failed to move {} into place: {rename_err}",
                        tmp_path.display()
                    ))
                }
            }
        }
    }
}

/// Dispatches slot reads/writes onto the tokio runtime and reports results
/// back to the UI over the app event channel.
///
/// Writes are fire-and-forget snapshots of the full list; nothing waits on
/// them and nothing cancels them, so whichever write lands last wins.
#[derive(Clone)]
pub struct StorageClient {
    storage: Arc<dyn SlotStorage>,
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
}

impl StorageClient {
    pub fn new(
        storage: impl SlotStorage + 'static,
        runtime_handle: Handle,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            storage: Arc::new(storage),
            runtime_handle,
            tx,
        }
    }

    /// Reads the task slot once, at startup.
    ///
    /// An absent slot loads as the empty list; a read or parse failure is
    /// reported as `StorageError` and the in-memory list stays as it is.
    pub fn load_tasks(&self) {
        let storage = Arc::clone(&self.storage);
        let tx = self.tx.clone();

        self.runtime_handle.spawn(async move {
            let event = match storage.get(TASKS_SLOT_KEY) {
                Ok(Some(value)) => match decode_tasks(&value) {
                    Ok(tasks) => AppEvent::TasksLoaded(tasks),
                    Err(err) => AppEvent::StorageError(format!("failed to load tasks: {err}")),
                },
                Ok(None) => AppEvent::TasksLoaded(Vec::new()),
                Err(err) => AppEvent::StorageError(format!("failed to load tasks: {err}")),
            };
            let _ = tx.send(event);
        });
    }

    /// Writes a snapshot of the full task list to the slot.
    pub fn persist_tasks(&self, tasks: Vec<TaskRecord>) {
        let value = match encode_tasks(&tasks) {
            Ok(value) => value,
            Err(err) => {
                let _ = self
                    .tx
                    .send(AppEvent::StorageError(format!("failed to save tasks: {err}")));
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        let tx = self.tx.clone();
        self.runtime_handle.spawn(async move {
            if let Err(err) = storage.set(TASKS_SLOT_KEY, &value) {
                let _ = tx.send(AppEvent::StorageError(format!("failed to save tasks: {err}")));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSlotStorage, SlotStorage};
    use crate::tasks::{decode_tasks, encode_tasks, TaskRecord};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_storage(prefix: &str) -> FileSlotStorage {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        let root: PathBuf = std::env::temp_dir().join(format!(
            "mocha_storage_{prefix}_{}_{}",
            std::process::id(),
            nanos
        ));
        FileSlotStorage::new(root)
    }

    #[test]
    fn get_of_absent_slot_is_none_not_an_error() {
        let storage = temp_storage("absent");
        let value = storage.get("tasks").expect("absent slot should not fail");
        assert!(value.is_none());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let storage = temp_storage("roundtrip");
        storage.set("tasks", "[1,2,3]").expect("write should succeed");

        let value = storage.get("tasks").expect("read should succeed");
        assert_eq!(value.as_deref(), Some("[1,2,3]"));

        let _ = fs::remove_dir_all(&storage.root);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let storage = temp_storage("overwrite");
        storage.set("tasks", "[]").expect("first write should succeed");
        storage
            .set("tasks", "[{\"id\":1}]")
            .expect("second write should succeed");

        let value = storage.get("tasks").expect("read should succeed");
        assert_eq!(value.as_deref(), Some("[{\"id\":1}]"));

        let _ = fs::remove_dir_all(&storage.root);
    }

    #[test]
    fn set_leaves_no_tmp_file_behind() {
        let storage = temp_storage("tmp_cleanup");
        storage.set("tasks", "[]").expect("write should succeed");
        assert!(!storage.root.join("tasks.json.tmp").exists());

        let _ = fs::remove_dir_all(&storage.root);
    }

    #[test]
    fn task_list_survives_simulated_restart() {
        let storage = temp_storage("restart");
        let tasks = vec![
            TaskRecord {
                id: 1,
                title: "Buy milk".to_string(),
                due_date: "2025-03-01".to_string(),
            },
            TaskRecord {
                id: 2,
                title: "Call mom".to_string(),
                due_date: "2025-03-02".to_string(),
            },
        ];

        let value = encode_tasks(&tasks).expect("encoding should succeed");
        storage.set("tasks", &value).expect("write should succeed");

        // A fresh handle over the same directory stands in for a new process.
        let reopened = FileSlotStorage::new(storage.root.clone());
        let stored = reopened
            .get("tasks")
            .expect("read should succeed")
            .expect("slot should be present");
        let loaded = decode_tasks(&stored).expect("decoding should succeed");
        assert_eq!(loaded, tasks);

        let _ = fs::remove_dir_all(&storage.root);
    }
}
