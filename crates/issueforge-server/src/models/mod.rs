//! Issueforge API Models
//!
//! Request/response DTOs for the HTTP boundary.
//! - Template: generation and saved template sets
//! - Profile: identity records

mod profile;
mod template;

pub use profile::*;
pub use template::*;
