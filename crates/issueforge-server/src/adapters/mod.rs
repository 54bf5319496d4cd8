//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod anthropic;
pub mod postgres;

// Re-exports
pub use anthropic::AnthropicProvider;
pub use postgres::{PgProfileRepository, PgTemplateRepository};
