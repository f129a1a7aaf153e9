//! Task list management.
//!
//! Task lists are named containers that group tasks. This module covers
//! creating, listing, retrieving and deleting them. Tasks only reference a
//! list by identifier, so deleting a list leaves its tasks in place. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
