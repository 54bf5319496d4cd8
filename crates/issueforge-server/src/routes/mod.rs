//! Issueforge API Routes
//!
//! - /issueforge/generate - Template generation
//! - /issueforge/templates - Saved template sets
//! - /issueforge/profiles - Identity records

pub mod generate;
pub mod profile;
pub mod swagger;
pub mod template;
