//! Issueforge Domain Library
//!
//! Core domain types and interfaces for the issueforge template generator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (TemplateSet, IssueTemplate, Profile)
//!   - `value_objects/`: Immutable value types (ProjectType)
//!   - `errors/`: Domain-specific error types
//!
//! - **Generation Core** (`generation/`): Transport-independent prompt
//!   construction, response decoding, and deterministic fallback templates
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use issueforge::domain::{GenerationRequest, TemplateSet};
//! use issueforge::ports::{TemplateRepository, LlmProvider};
//! ```

pub mod domain;
pub mod generation;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, GenerationError, GenerationRequest, IssueTemplate, Profile, ProjectType,
    TemplateSet,
};
pub use generation::{build_prompt, decode_template_set, fallback_templates};
pub use ports::{
    CompletionRequest,
    CompletionResponse,
    ContentBlock,
    // Services
    LlmProvider,
    // Repositories
    ProfileRepository,
    TemplateRepository,
    TokenUsage,
};
