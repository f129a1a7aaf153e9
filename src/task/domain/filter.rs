//! Composable task predicates built from optional query parameters.
//!
//! A [`TaskFilter`] is a conjunction of [`FilterClause`] values. Each clause
//! is only present when its criterion was supplied, so an empty filter
//! matches every task. Adapters either evaluate the filter in memory with
//! [`TaskFilter::matches`] or translate each clause into their own query
//! language.

use super::{Effort, Priority, Task};
use crate::task_list::domain::TaskListId;
use std::collections::BTreeSet;

/// One conjunctive restriction on the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Task belongs to the given task list.
    TaskList(TaskListId),
    /// Task priority is one of the listed values.
    PriorityIn(BTreeSet<Priority>),
    /// Task effort is one of the listed values.
    EffortIn(BTreeSet<Effort>),
}

impl FilterClause {
    /// Returns `true` when `task` satisfies the clause.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::TaskList(id) => task.task_list_id() == *id,
            Self::PriorityIn(priorities) => priorities.contains(&task.priority()),
            Self::EffortIn(efforts) => efforts.contains(&task.effort()),
        }
    }
}

/// Conjunction of filter clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    clauses: Vec<FilterClause>,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Builds a filter from optional criteria.
    ///
    /// Each non-empty criterion adds one clause; empty criteria add nothing.
    /// Duplicate values within a criterion collapse.
    #[must_use]
    pub fn build(
        task_list_id: Option<TaskListId>,
        priorities: &[Priority],
        efforts: &[Effort],
    ) -> Self {
        let mut filter = Self::unrestricted();
        if let Some(id) = task_list_id {
            filter = filter.in_task_list(id);
        }
        filter
            .with_priorities(priorities.iter().copied())
            .with_efforts(efforts.iter().copied())
    }

    /// Restricts the filter to tasks owned by `task_list_id`.
    #[must_use]
    pub fn in_task_list(mut self, task_list_id: TaskListId) -> Self {
        self.clauses.push(FilterClause::TaskList(task_list_id));
        self
    }

    /// Restricts the filter to the given priorities. No-op when empty.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        let set: BTreeSet<Priority> = priorities.into_iter().collect();
        if !set.is_empty() {
            self.clauses.push(FilterClause::PriorityIn(set));
        }
        self
    }

    /// Restricts the filter to the given effort levels. No-op when empty.
    #[must_use]
    pub fn with_efforts(mut self, efforts: impl IntoIterator<Item = Effort>) -> Self {
        let set: BTreeSet<Effort> = efforts.into_iter().collect();
        if !set.is_empty() {
            self.clauses.push(FilterClause::EffortIn(set));
        }
        self
    }

    /// Returns the clauses in the order they were added.
    #[must_use]
    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// Returns `true` when the filter matches every task.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns `true` when `task` satisfies every clause.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.clauses.iter().all(|clause| clause.matches(task))
    }
}
