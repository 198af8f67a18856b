pub mod task;

// Export the Task and TaskStatus types for use throughout the app
pub use task::{Task, TaskStatus};
