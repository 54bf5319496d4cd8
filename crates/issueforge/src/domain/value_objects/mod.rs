//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod project_type;

pub use project_type::*;
