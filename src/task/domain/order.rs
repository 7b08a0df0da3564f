//! Listing order for task collections.

/// Ordering applied when listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskOrder {
    /// Whatever order the store yields.
    #[default]
    Unordered,
    /// Ascending by title.
    TitleAscending,
    /// Descending by title.
    TitleDescending,
}

impl TaskOrder {
    /// Interprets the `sort` query parameter.
    ///
    /// Only the exact values `asc` and `desc` select an ordering; anything
    /// else, including absence, falls back to [`TaskOrder::Unordered`].
    #[must_use]
    pub fn from_sort_param(sort: Option<&str>) -> Self {
        match sort {
            Some("asc") => Self::TitleAscending,
            Some("desc") => Self::TitleDescending,
            _ => Self::Unordered,
        }
    }
}
