//! Persistence adapters for the task list module.
//!
//! - [`memory::InMemoryTaskListRepository`]: Thread-safe in-memory storage
//! - [`postgres::PostgresTaskListRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM

pub mod memory;
pub mod postgres;
