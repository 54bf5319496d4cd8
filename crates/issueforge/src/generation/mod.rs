//! Generation Core
//!
//! Transport-independent pieces of the template generation flow: prompt
//! construction, typed decoding of the untrusted completion text, and the
//! deterministic fallback skeletons. Everything here is testable with
//! literal fixtures, without a live provider.

mod decode;
mod fallback;
mod prompt;

pub use decode::*;
pub use fallback::*;
pub use prompt::*;

use serde::{Deserialize, Serialize};

/// Where a displayed template set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSource {
    /// Decoded from a successful provider completion
    Generated,
    /// Synthesized locally after a generation failure
    Fallback,
}
