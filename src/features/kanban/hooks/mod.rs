pub mod use_task_dialog;

pub use use_task_dialog::use_task_dialog;
