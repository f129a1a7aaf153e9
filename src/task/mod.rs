//! Task lifecycle management.
//!
//! Tasks belong to exactly one task list at a time and carry a priority, an
//! effort estimate and a `PENDING`/`DONE` state. This module covers creating
//! tasks under a list, updating their state, moving them between lists,
//! deleting them, and querying them with composable filters and a
//! deterministic multi-key sort order. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`], including [`domain::TaskFilter`] and
//!   [`domain::SortOrder`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
