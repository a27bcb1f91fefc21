//! Key-value tree helpers shared by the defaults and document layers.
//!
//! Responsibilities:
//! - Address nested values by dotted key paths (`http.port`).
//! - Deep-merge one tree over another.
//!
//! Invariants:
//! - Merge recurses through mappings: an overlay can replace `http.port` without
//!   touching `http.readTimeout`.
//! - Any non-mapping overlay value (scalar, sequence) replaces the base value whole.
//! - A null value carries no information: it leaves the base value in place when
//!   merged and is dropped before a section is decoded.
//! - Keys absent from the overlay keep their base value.

use serde_yaml::{Mapping, Value};

/// Look up a value by dotted key path.
///
/// A path blocked by a non-mapping value is simply missing; see [`lookup`].
pub fn get_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    lookup(tree, path).ok().flatten()
}

/// Look up a value by dotted key path, telling a missing key apart from a
/// path blocked by a non-mapping ancestor.
///
/// A null ancestor counts as missing. The error names the blocking key path.
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Result<Option<&'a Value>, String> {
    let mut node = tree;
    let mut walked: usize = 0;
    for key in path.split('.') {
        node = match node {
            Value::Mapping(map) => match map.get(key) {
                Some(child) => child,
                None => return Ok(None),
            },
            Value::Null => return Ok(None),
            _ => {
                let ancestor = &path[..walked.saturating_sub(1)];
                return Err(format!("expected a mapping at '{ancestor}'"));
            }
        };
        walked += key.len() + 1;
    }
    Ok(Some(node))
}

/// Remove null-valued keys from every mapping in `value`.
pub fn drop_nulls(value: &mut Value) {
    if let Value::Mapping(map) = value {
        map.retain(|_, child| !child.is_null());
        for (_, child) in map.iter_mut() {
            drop_nulls(child);
        }
    }
}

/// Set a value by dotted key path, creating intermediate mappings.
///
/// A non-mapping value found on the way is replaced by a mapping.
pub fn set_path(tree: &mut Mapping, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            tree.insert(Value::from(path), value);
        }
        Some((head, rest)) => {
            let key = Value::from(head);
            let child = tree
                .entry(key)
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !child.is_mapping() {
                *child = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(map) = child {
                set_path(map, rest, value);
            }
        }
    }
}

/// Merge `overlay` into `base` in place.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        if !overlay_value.is_null() {
                            base_map.insert(key, overlay_value);
                        }
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Convenience wrapper returning the merged tree.
pub fn merged(mut base: Value, overlay: Value) -> Value {
    deep_merge(&mut base, overlay);
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_get_path_walks_nested_mappings() {
        let tree = yaml("http:\n  timeouts:\n    read: 10s\n");
        assert_eq!(
            get_path(&tree, "http.timeouts.read"),
            Some(&Value::from("10s"))
        );
        assert!(get_path(&tree, "http.port").is_none());
        assert!(get_path(&tree, "http.timeouts.read.deeper").is_none());
    }

    #[test]
    fn test_lookup_reports_scalar_ancestor() {
        let tree = yaml("cache: 5
email:
  templates: oops
auth: ~
");
        assert_eq!(
            lookup(&tree, "cache.ttl"),
            Err("expected a mapping at 'cache'".to_string())
        );
        assert_eq!(
            lookup(&tree, "email.templates.verification_email"),
            Err("expected a mapping at 'email.templates'".to_string())
        );
        assert_eq!(lookup(&tree, "auth.accessTokenTTL"), Ok(None));
        assert_eq!(lookup(&tree, "limiter.rps"), Ok(None));
        assert_eq!(lookup(&tree, "cache"), Ok(Some(&Value::from(5))));
    }

    #[test]
    fn test_drop_nulls_removes_nested_null_keys() {
        let mut tree = yaml("smtp:
  host:
  port: 587
  tls:
    ca: ~
scopes: [a, ~]
");
        drop_nulls(&mut tree);
        assert_eq!(tree, yaml("smtp:
  port: 587
  tls: {}
scopes: [a, ~]
"));
    }

    #[test]
    fn test_set_path_creates_intermediate_sections() {
        let mut map = Mapping::new();
        set_path(&mut map, "limiter.rps", Value::from(10));
        set_path(&mut map, "limiter.burst", Value::from(2));
        let tree = Value::Mapping(map);
        assert_eq!(get_path(&tree, "limiter.rps"), Some(&Value::from(10)));
        assert_eq!(get_path(&tree, "limiter.burst"), Some(&Value::from(2)));
    }

    #[test]
    fn test_merge_overrides_single_nested_key() {
        let base = yaml("http:\n  port: 8000\n  readTimeout: 10s\nlimiter:\n  rps: 20\n");
        let overlay = yaml("http:\n  port: 9000\n");
        let tree = merged(base, overlay);

        assert_eq!(get_path(&tree, "http.port"), Some(&Value::from(9000)));
        assert_eq!(
            get_path(&tree, "http.readTimeout"),
            Some(&Value::from("10s"))
        );
        assert_eq!(get_path(&tree, "limiter.rps"), Some(&Value::from(20)));
    }

    #[test]
    fn test_merge_replaces_sequences_whole() {
        let base = yaml("google:\n  scopes: [a, b]\n");
        let overlay = yaml("google:\n  scopes: [c]\n");
        let tree = merged(base, overlay);
        assert_eq!(get_path(&tree, "google.scopes"), Some(&yaml("[c]")));
    }

    #[test]
    fn test_merge_ignores_null_overlay_values() {
        let base = yaml("email:\n  subjects:\n    verification_email: Hi\n");
        let overlay = yaml("email:\n  subjects:\nextra: ~\n");
        let tree = merged(base, overlay);
        assert_eq!(
            get_path(&tree, "email.subjects.verification_email"),
            Some(&Value::from("Hi"))
        );
        assert!(get_path(&tree, "extra").is_none());
    }

    #[test]
    fn test_merge_adds_new_sections() {
        let tree = merged(yaml("a: 1\n"), yaml("b:\n  c: 2\n"));
        assert_eq!(get_path(&tree, "a"), Some(&Value::from(1)));
        assert_eq!(get_path(&tree, "b.c"), Some(&Value::from(2)));
    }
}
