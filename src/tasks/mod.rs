use serde::{Deserialize, Serialize};

pub mod store;

/// Name of the storage slot holding the serialized task list.
pub const TASKS_SLOT_KEY: &str = "tasks";

/// One to-do entry. Records are immutable after creation; the list only
/// ever appends or removes whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub due_date: String,
}

/// Serializes the full task list for the storage slot.
pub fn encode_tasks(tasks: &[TaskRecord]) -> Result<String, String> {
    serde_json::to_string(tasks).map_err(|err| format!("failed to encode task list: {err}"))
}

/// Parses a storage slot value back into a task list.
pub fn decode_tasks(value: &str) -> Result<Vec<TaskRecord>, String> {
    serde_json::from_str(value).map_err(|err| format!("failed to parse task list: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{decode_tasks, encode_tasks, TaskRecord};

    #[test]
    fn slot_value_uses_camel_case_due_date() {
        let tasks = vec![TaskRecord {
            id: 1740000000000,
            title: "Buy milk".to_string(),
            due_date: "2025-03-01".to_string(),
        }];

        let value = encode_tasks(&tasks).expect("encoding should succeed");
        assert!(value.contains("\"dueDate\":\"2025-03-01\""));
        assert!(!value.contains("due_date"));
    }

    #[test]
    fn decode_rejects_malformed_value() {
        let error = decode_tasks("{not json").expect_err("malformed value should fail");
        assert!(error.contains("failed to parse task list"));
    }

    #[test]
    fn decode_roundtrips_encode() {
        let tasks = vec![
            TaskRecord {
                id: 1,
                title: "first".to_string(),
                due_date: "2025-01-01".to_string(),
            },
            TaskRecord {
                id: 2,
                title: "second".to_string(),
                due_date: "2025-01-02".to_string(),
            },
        ];

        let value = encode_tasks(&tasks).expect("encoding should succeed");
        let decoded = decode_tasks(&value).expect("decoding should succeed");
        assert_eq!(decoded, tasks);
    }
}
