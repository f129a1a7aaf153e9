//! Taskboard: task list tracking service.
//!
//! Clients group tasks into named task lists, update task state, move tasks
//! between lists and query tasks with multi-value filters and multi-key
//! sorting.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration enforcing lifecycle and capacity rules
//!
//! # Modules
//!
//! - [`task_list`]: Task list creation, lookup and removal
//! - [`task`]: Task lifecycle, filtering and sorting
//! - [`api`]: HTTP routes and the JSON error envelope
//! - [`config`]: Layered server configuration
//! - [`error`]: Error taxonomy shared by the services
//! - [`postgres`]: Connection pool and schema set-up for the Diesel adapters

pub mod api;
pub mod config;
pub mod error;
pub mod postgres;
pub mod task;
pub mod task_list;
