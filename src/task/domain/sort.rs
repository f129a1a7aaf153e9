//! Deterministic multi-key sort orders for task queries.
//!
//! [`SortOrder::build`] accepts a comma-separated field list and a direction
//! token. Field names are kept as text; adapters resolve them with
//! [`SortOrder::resolve`] and reject names that are not [`TaskField`]s.

use super::Task;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Field name of the identity tie-break key.
const ID_FIELD: &str = "id";

/// Sort direction applied to every key of a [`SortOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Resolves a direction token.
    ///
    /// Only `desc` (any case, surrounding whitespace ignored) selects
    /// [`SortDirection::Descending`]; anything else, including no token, is
    /// ascending.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(value) if value.trim().eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the lowercase token for the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, direction)` pair of a sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    field: String,
    direction: SortDirection,
}

impl SortKey {
    /// Creates a sort key.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Returns the field name as supplied by the caller.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the key direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Ordered sequence of sort keys ending with the `id` tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    keys: Vec<SortKey>,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::by_id(SortDirection::Ascending)
    }
}

impl SortOrder {
    /// Creates an order by identity only.
    #[must_use]
    pub fn by_id(direction: SortDirection) -> Self {
        Self {
            keys: vec![SortKey::new(ID_FIELD, direction)],
        }
    }

    /// Builds a sort order from a comma-separated field list and a direction
    /// token.
    ///
    /// Field names are trimmed; blank segments and repeated names are
    /// dropped, keeping the first occurrence. `id` is appended as the final
    /// key unless already present, so equal rows always order
    /// deterministically. A blank field list sorts by `id` alone.
    #[must_use]
    pub fn build(sort_by: Option<&str>, direction: Option<&str>) -> Self {
        let direction = SortDirection::from_token(direction);
        let mut seen = HashSet::new();
        let mut keys: Vec<SortKey> = sort_by
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty() && seen.insert(*field))
            .map(|field| SortKey::new(field, direction))
            .collect();

        if !seen.contains(ID_FIELD) {
            keys.push(SortKey::new(ID_FIELD, direction));
        }
        Self { keys }
    }

    /// Returns the keys in priority order.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Resolves every key to a known [`TaskField`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTaskField`] for the first name that is not sortable.
    pub fn resolve(&self) -> Result<Vec<(TaskField, SortDirection)>, UnknownTaskField> {
        self.keys
            .iter()
            .map(|key| Ok((TaskField::try_from(key.field())?, key.direction())))
            .collect()
    }

    /// Returns a comparator applying the resolved keys in order.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTaskField`] for the first name that is not sortable.
    pub fn comparator(
        &self,
    ) -> Result<impl Fn(&Task, &Task) -> Ordering + use<>, UnknownTaskField> {
        let resolved = self.resolve()?;
        Ok(move |a: &Task, b: &Task| {
            resolved
                .iter()
                .map(|(field, direction)| direction.apply(field.compare(a, b)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Error returned for a sort field that tasks do not have.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct UnknownTaskField(pub String);

/// Sortable task attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// Task identifier.
    Id,
    /// Owning task list identifier.
    TaskListId,
    /// Task name, compared lexicographically.
    Name,
    /// Lifecycle state, `PENDING` before `DONE`.
    State,
    /// Priority, `LOW` before `HIGH`.
    Priority,
    /// Effort, `LOW` before `HIGH`.
    Effort,
}

impl TaskField {
    /// Compares two tasks on this field in ascending order.
    #[must_use]
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Id => a.id().cmp(&b.id()),
            Self::TaskListId => a.task_list_id().cmp(&b.task_list_id()),
            Self::Name => a.name().cmp(b.name()),
            Self::State => a.state().cmp(&b.state()),
            Self::Priority => a.priority().cmp(&b.priority()),
            Self::Effort => a.effort().cmp(&b.effort()),
        }
    }
}

impl TryFrom<&str> for TaskField {
    type Error = UnknownTaskField;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "id" => Ok(Self::Id),
            "taskListId" | "task_list_id" => Ok(Self::TaskListId),
            "name" => Ok(Self::Name),
            "state" => Ok(Self::State),
            "priority" => Ok(Self::Priority),
            "effort" => Ok(Self::Effort),
            other => Err(UnknownTaskField(other.to_owned())),
        }
    }
}
