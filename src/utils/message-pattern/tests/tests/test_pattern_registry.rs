// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use message_pattern::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const TEST_REGISTRY: &str = "TestMsgPattern";
const TEST_OPERATIONS: [OperationName; 3] = ["Create", "Rename", "Delete"];

fn make_registry(prefix: &str) -> PatternRegistry {
    PatternRegistry::new(
        TEST_REGISTRY,
        Some(ModulePrefix::new(prefix)),
        TEST_OPERATIONS,
    )
    .unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test]
fn test_routing_keys_are_prefixed_in_supplied_order() {
    let registry = make_registry("Dataset");

    assert_eq!(TEST_REGISTRY, registry.name());
    assert_eq!("Dataset", registry.prefix().as_str());
    assert_eq!(3, registry.len());
    assert!(!registry.is_empty());

    assert_eq!(
        vec![
            ("Create", "Dataset/Create"),
            ("Rename", "Dataset/Rename"),
            ("Delete", "Dataset/Delete"),
        ],
        registry
            .iter()
            .map(|(operation_name, routing_key)| (operation_name, routing_key.as_str()))
            .collect::<Vec<_>>(),
    );

    assert_eq!(
        TEST_OPERATIONS.to_vec(),
        registry.operations().collect::<Vec<_>>()
    );
    assert_eq!(
        vec!["Dataset/Create", "Dataset/Rename", "Dataset/Delete"],
        registry
            .routing_keys()
            .map(RoutingKey::as_str)
            .collect::<Vec<_>>()
    );
}

#[test_log::test]
fn test_lookup_known_and_unknown_operations() {
    let registry = make_registry("Dataset");

    assert_eq!("Dataset/Rename", registry.get("Rename").unwrap().as_str());
    assert!(registry.contains("Delete"));
    assert_eq!(
        Some("Dataset/Delete"),
        registry.try_get("Delete").map(RoutingKey::as_str)
    );

    // Names are case-sensitive
    assert!(!registry.contains("rename"));
    assert_eq!(None, registry.try_get("rename"));

    let err = registry.get("Nonexistent").unwrap_err();
    assert_eq!(
        UnknownOperationError {
            registry_name: TEST_REGISTRY,
            operation_name: "Nonexistent".to_string(),
        },
        err
    );
    assert_eq!(
        "Unknown operation 'Nonexistent' in message patterns 'TestMsgPattern'",
        err.to_string()
    );
}

#[test_log::test]
fn test_repeated_lookups_return_same_key() {
    let registry = make_registry("Dataset");

    let first = registry.get("Create").unwrap();
    let second = registry.get("Create").unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

#[test_log::test]
fn test_reverse_lookup() {
    let registry = make_registry("Dataset");

    assert_eq!(Some("Delete"), registry.operation_for("Dataset/Delete"));
    assert_eq!(None, registry.operation_for("Dataset/Unknown"));
    assert_eq!(None, registry.operation_for("Other/Delete"));
    assert_eq!(None, registry.operation_for("Delete"));
}

#[test_log::test]
fn test_missing_prefix_fails_construction() {
    let res = PatternRegistry::new(TEST_REGISTRY, None, TEST_OPERATIONS);

    match res {
        Err(PatternRegistryBuildError::MissingPrefix(e)) => {
            assert_eq!(TEST_REGISTRY, e.registry_name);
            assert_eq!(
                "Module prefix of message patterns 'TestMsgPattern' is not defined",
                e.to_string()
            );
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test_log::test]
fn test_empty_prefix_is_tolerated() {
    let registry = make_registry("");

    assert_eq!("/Delete", registry.get("Delete").unwrap().as_str());
    assert_eq!("", registry.get("Delete").unwrap().prefix());
    assert_eq!(Some("Delete"), registry.operation_for("/Delete"));
}

#[test_log::test]
fn test_prefix_with_separator_keeps_operation_segment() {
    let registry = make_registry("Account/Dataset");

    let routing_key = registry.get("Create").unwrap();
    assert_eq!("Account/Dataset/Create", routing_key.as_str());
    assert_eq!("Account/Dataset", routing_key.prefix());
    assert_eq!("Create", routing_key.operation());
}

#[test_log::test]
fn test_duplicate_operation_is_rejected() {
    let res = PatternRegistry::new(
        TEST_REGISTRY,
        Some(ModulePrefix::new("Dataset")),
        ["Create", "Delete", "Create"],
    );

    match res {
        Err(PatternRegistryBuildError::DuplicateRoutingKey(e)) => {
            assert_eq!(
                DuplicateRoutingKeyError {
                    registry_name: TEST_REGISTRY,
                    operation_name: "Create",
                    routing_key: "Dataset/Create".to_string(),
                },
                e
            );
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test_log::test]
fn test_invalid_operation_names_are_rejected() {
    for operation_name in ["", "Create/All"] {
        let res = PatternRegistry::new(
            TEST_REGISTRY,
            Some(ModulePrefix::new("Dataset")),
            ["Delete", operation_name],
        );

        match res {
            Err(PatternRegistryBuildError::InvalidOperationName(e)) => {
                assert_eq!(operation_name, e.operation_name);
                assert_eq!(TEST_REGISTRY, e.registry_name);
            }
            other => panic!("Unexpected result for '{operation_name}': {other:?}"),
        }
    }
}

#[test_log::test]
fn test_empty_operation_list() {
    let registry = PatternRegistry::new(
        TEST_REGISTRY,
        Some(ModulePrefix::new("Dataset")),
        std::iter::empty(),
    )
    .unwrap();

    assert!(registry.is_empty());
    assert_eq!(0, registry.iter().len());
}

#[test_log::test]
fn test_clones_are_independent_values() {
    let registry = make_registry("Dataset");
    let clone = registry.clone();
    drop(registry);

    assert_eq!("Dataset/Create", clone.get("Create").unwrap().as_str());
    assert_eq!(3, (&clone).into_iter().len());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
