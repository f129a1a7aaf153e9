//! Step definitions for task workflow BDD scenarios.

mod given;
mod when;
pub mod world;
