//! Persistence adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory storage that
//!   evaluates filters and sort orders directly
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM, translating filters into `WHERE` clauses

pub mod memory;
pub mod postgres;
