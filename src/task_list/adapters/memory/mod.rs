//! In-memory adapters for task list persistence.

mod task_list;

pub use task_list::InMemoryTaskListRepository;
