use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    ToDo,
    #[serde(rename = "progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Column header text, uppercased per the board layout.
    pub fn column_label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "TODO",
            TaskStatus::InProgress => "PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    /// Class suffix used by the stylesheet for per-status accent colors.
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo",
            TaskStatus::InProgress => "progress",
            TaskStatus::Done => "done",
        }
    }

    /// The three columns in board order.
    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub deadline: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u32, title: String, deadline: String) -> Self {
        Self {
            id,
            title,
            status: TaskStatus::ToDo,
            deadline,
            created_at: Utc::now(),
        }
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
