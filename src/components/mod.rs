//! UI Components
//!
//! Leptos components making up the task widget.

mod header;
mod new_task_form;
mod progress_bar;
mod task_item;
mod task_list_view;
mod task_footer;
mod confetti_canvas;

pub use header::Header;
pub use new_task_form::NewTaskForm;
pub use progress_bar::ProgressBar;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
pub use task_footer::TaskFooter;
pub use confetti_canvas::ConfettiCanvas;
