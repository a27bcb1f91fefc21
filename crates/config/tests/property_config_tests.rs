//! Property-based tests for layered configuration resolution.
//!
//! Randomly generated trees and values exercise the merge rules and the
//! duration codec beyond the hand-picked unit cases.
//!
//! Test coverage:
//! - deep_merge: overlay keys win, base-only keys survive, nulls are ignored
//! - Merge with an empty overlay is the identity
//! - Duration strings: formatted durations parse back to the same value
//! - Full resolution: overlay and base values land in the snapshot

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

use storefront_config::ConfigLoader;
use storefront_config::constants::BOUND_ENV_VARS;
use storefront_config::tree::{deep_merge, get_path, merged};
use storefront_config::types::duration::{format_duration, parse_duration};

/// Strategy for camelCase-ish document keys.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,8}".prop_map(String::from)
}

/// Strategy for scalar leaves a document may hold.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u32>().prop_map(|n| Value::from(u64::from(n))),
        any::<bool>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Strategy for two-level document trees (`section.key: scalar`).
fn tree_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(
        key_strategy(),
        prop::collection::btree_map(key_strategy(), scalar_strategy(), 0..5),
        0..5,
    )
    .prop_map(|sections| {
        let mut root = Mapping::new();
        for (section, leaves) in sections {
            let mut map = Mapping::new();
            for (key, value) in leaves {
                map.insert(Value::from(key), value);
            }
            root.insert(Value::from(section), Value::Mapping(map));
        }
        Value::Mapping(root)
    })
}

fn leaves(tree: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    if let Value::Mapping(sections) = tree {
        for (section, body) in sections {
            if let (Some(section), Value::Mapping(map)) = (section.as_str(), body) {
                for (key, value) in map {
                    if let Some(key) = key.as_str() {
                        out.push((format!("{section}.{key}"), value.clone()));
                    }
                }
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_overlay_leaves_win(base in tree_strategy(), overlay in tree_strategy()) {
        let result = merged(base, overlay.clone());
        for (path, value) in leaves(&overlay) {
            prop_assert_eq!(get_path(&result, &path), Some(&value), "path {}", path);
        }
    }

    #[test]
    fn prop_base_only_leaves_survive(base in tree_strategy(), overlay in tree_strategy()) {
        let result = merged(base.clone(), overlay.clone());
        for (path, value) in leaves(&base) {
            if get_path(&overlay, &path).is_none() {
                prop_assert_eq!(get_path(&result, &path), Some(&value), "path {}", path);
            }
        }
    }

    #[test]
    fn prop_empty_and_null_overlays_are_identity(base in tree_strategy()) {
        prop_assert_eq!(merged(base.clone(), Value::Mapping(Mapping::new())), base.clone());

        let mut with_null = base.clone();
        deep_merge(&mut with_null, Value::Null);
        prop_assert_eq!(with_null, base);
    }

    #[test]
    fn prop_null_leaf_keeps_base_value(base in tree_strategy()) {
        let mut overlay = Mapping::new();
        for (path, _) in leaves(&base) {
            if let Some((section, key)) = path.split_once('.') {
                let entry = overlay
                    .entry(Value::from(section))
                    .or_insert_with(|| Value::Mapping(Mapping::new()));
                if let Value::Mapping(map) = entry {
                    map.insert(Value::from(key), Value::Null);
                }
            }
        }
        prop_assert_eq!(merged(base.clone(), Value::Mapping(overlay)), base);
    }

    #[test]
    fn prop_formatted_duration_parses_back(secs in 0u64..10_000_000, millis in 0u32..1000) {
        let duration = Duration::from_secs(secs) + Duration::from_millis(u64::from(millis));
        let text = format_duration(duration);
        prop_assert_eq!(parse_duration(&text), Ok(duration), "text {}", text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    #[serial]
    fn prop_resolved_limiter_follows_precedence(
        base_rps in 1u32..10_000,
        overlay_rps in 1u32..10_000,
        base_burst in 1u32..100,
    ) {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("main.yml"),
            format!("limiter:\n  rps: {base_rps}\n  burst: {base_burst}\n"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("prod.yml"),
            format!("limiter:\n  rps: {overlay_rps}\n"),
        )
        .unwrap();

        let mut vars: Vec<(&str, Option<&str>)> =
            BOUND_ENV_VARS.iter().map(|var| (*var, None)).collect();
        vars.retain(|(var, _)| *var != "APP_ENV");
        vars.push(("APP_ENV", Some("prod")));

        let config = temp_env::with_vars(vars, || ConfigLoader::new(dir.path()).load().unwrap());

        prop_assert_eq!(config.limiter.rps, overlay_rps);
        prop_assert_eq!(config.limiter.burst, base_burst);
        prop_assert_eq!(config.limiter.ttl, Duration::from_secs(600));
    }
}
