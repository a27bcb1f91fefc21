//! Configuration document loading.
//!
//! Responsibilities:
//! - Locate and parse the base document (`main.yml`) in the configs directory.
//! - For non-local environments, locate the overlay document (`<env>.yml`) and
//!   deep-merge it over the base.
//!
//! Does NOT handle:
//! - Defaults (see defaults.rs) or typed decoding (see sections.rs).
//! - Watching documents for changes.
//!
//! Invariants:
//! - A missing or unparsable base document is `ConfigError::MissingBaseConfig`.
//! - For the local environment the overlay is never looked up, even if present.
//! - For any other environment a missing or unparsable overlay is
//!   `ConfigError::MissingOverlayConfig`.
//! - Documents are parsed with `serde_yaml`, which also accepts JSON.

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ConfigError;
use super::tree::deep_merge;
use crate::constants::{BASE_DOCUMENT, DOCUMENT_EXTENSIONS, LOCAL_ENVIRONMENT};

/// Result of reading the configs directory.
#[derive(Debug, Clone)]
pub struct LoadedDocuments {
    /// Base document with the overlay (if any) merged over it.
    pub tree: Value,
    pub base_path: PathBuf,
    pub overlay_path: Option<PathBuf>,
}

/// Read the base document and, unless `environment` is local, merge its overlay.
pub fn load_documents(dir: &Path, environment: &str) -> Result<LoadedDocuments, ConfigError> {
    let base_path =
        find_document(dir, BASE_DOCUMENT).ok_or_else(|| ConfigError::MissingBaseConfig {
            dir: dir.to_path_buf(),
            reason: not_found_reason(BASE_DOCUMENT),
        })?;
    let mut tree = parse_document(&base_path).map_err(|reason| ConfigError::MissingBaseConfig {
        dir: dir.to_path_buf(),
        reason,
    })?;
    debug!(path = %base_path.display(), "loaded base config");

    if environment == LOCAL_ENVIRONMENT {
        return Ok(LoadedDocuments {
            tree,
            base_path,
            overlay_path: None,
        });
    }

    let overlay_error = |reason: String| ConfigError::MissingOverlayConfig {
        environment: environment.to_string(),
        dir: dir.to_path_buf(),
        reason,
    };
    if !is_plain_name(environment) {
        return Err(overlay_error(
            "environment tag is not a valid document name".to_string(),
        ));
    }
    let overlay_path =
        find_document(dir, environment).ok_or_else(|| overlay_error(not_found_reason(environment)))?;
    let overlay = parse_document(&overlay_path).map_err(overlay_error)?;
    deep_merge(&mut tree, overlay);
    debug!(path = %overlay_path.display(), environment, "merged overlay config");

    Ok(LoadedDocuments {
        tree,
        base_path,
        overlay_path: Some(overlay_path),
    })
}

/// Find `<name>.<ext>` in `dir`, trying each recognized extension in order.
pub fn find_document(dir: &Path, name: &str) -> Option<PathBuf> {
    DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}

/// Parse a document into a mapping tree.
///
/// An empty document is an empty mapping. Errors are rendered as strings
/// because only the message travels into `ConfigError`.
fn parse_document(path: &Path) -> Result<Value, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value: Value = serde_yaml::from_str(&raw)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(_) => Ok(value),
        _ => Err(format!(
            "failed to parse {}: top level must be a mapping",
            path.display()
        )),
    }
}

/// Reject tags that would escape the configs directory or name a hidden file.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
}

fn not_found_reason(name: &str) -> String {
    let candidates = DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| format!("{name}.{ext}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("none of {candidates} exists")
}
