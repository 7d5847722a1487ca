//! Cross-cutting plumbing shared by every hotel service binary.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
