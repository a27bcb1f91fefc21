//! Configuration loader for defaults, documents, and environment variables.
//!
//! Responsibilities:
//! - Resolve the `Config` snapshot through a builder-pattern `ConfigLoader`.
//! - Merge defaults, the base document, the environment overlay, and bound
//!   environment variables in that precedence order.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Live reloading or watching documents.
//! - Validating business semantics of resolved values (e.g. database reachability).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over document and default values.
//! - Secrets are only ever read from environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod defaults;
mod derived;
mod document;
mod env;
mod error;
mod sections;
pub mod tree;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, init};
pub use defaults::default_tree;
pub use document::{LoadedDocuments, find_document, load_documents};
pub use env::{UnsetEnvPolicy, env_var_or_none};
pub use error::ConfigError;
