pub mod action;
pub mod id_generator;
pub mod reducer;
pub mod summary;
pub mod task_list;

pub use action::TaskAction;
pub use id_generator::TaskIdGenerator;
pub use reducer::reduce;
pub use summary::{TaskFilter, TaskSummary};
pub use task_list::TaskListModel;
