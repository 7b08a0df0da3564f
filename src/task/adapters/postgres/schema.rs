//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Completion timestamp; null while the task is open.
        completed_at -> Nullable<Timestamptz>,
    }
}
