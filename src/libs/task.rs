use serde::{Deserialize, Serialize};

/// A todo record as exchanged with the remote collection and stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, title: &str, user_id: i64) -> Self {
        Task {
            user_id,
            id,
            title: title.to_string(),
            completed: false,
        }
    }
}

/// Request body for creating a task; the server picks the id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub user_id: i64,
    pub completed: bool,
}

impl NewTask {
    pub fn new(title: &str, user_id: i64) -> Self {
        NewTask {
            title: title.to_string(),
            user_id,
            completed: false,
        }
    }
}

/// Id for a task created locally: one past the largest id in `tasks`, or 1.
/// Saturates at `i64::MAX`.
pub fn next_id(tasks: &[Task]) -> i64 {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max.saturating_add(1))
}
