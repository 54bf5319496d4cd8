//! PostgreSQL Repository Implementations

mod profile_repository;
mod template_repository;

pub use profile_repository::PgProfileRepository;
pub use template_repository::PgTemplateRepository;
