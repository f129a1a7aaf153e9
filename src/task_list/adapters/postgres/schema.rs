//! Diesel schema for task list persistence.

diesel::table! {
    /// Named containers grouping tasks.
    task_lists (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task list name.
        #[max_length = 255]
        name -> Varchar,
    }
}
