//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records. Enum columns hold the declaration rank.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning task list identifier.
        task_list_id -> Int8,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Lifecycle state rank.
        state -> Int2,
        /// Priority rank.
        priority -> Int2,
        /// Effort rank.
        effort -> Int2,
    }
}
