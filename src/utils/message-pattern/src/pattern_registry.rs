// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type OperationName = &'static str;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read-only table translating operation names of one module into routing
/// keys.
///
/// All keys are computed during construction. Entries keep the order in which
/// operations were supplied, and there is no way to modify a registry once it
/// is built.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    name: &'static str,
    prefix: ModulePrefix,
    entries: Vec<(OperationName, RoutingKey)>,
    index_by_operation: HashMap<OperationName, usize>,
    index_by_routing_key: HashMap<String, usize>,
}

impl PatternRegistry {
    #[tracing::instrument(level = "debug", skip(operations))]
    pub fn new(
        name: &'static str,
        maybe_prefix: Option<ModulePrefix>,
        operations: impl IntoIterator<Item = OperationName>,
    ) -> Result<Self, PatternRegistryBuildError> {
        let Some(prefix) = maybe_prefix else {
            tracing::error!(registry = name, "Module prefix of message patterns is not defined");
            return Err(MissingPrefixError {
                registry_name: name,
            }
            .into());
        };

        if prefix.is_empty() {
            tracing::warn!(
                registry = name,
                "Message patterns are registered with an empty module prefix"
            );
        }

        let operations = operations.into_iter();
        let capacity = operations.size_hint().0;

        let mut entries = Vec::with_capacity(capacity);
        let mut index_by_operation = HashMap::with_capacity(capacity);
        let mut index_by_routing_key = HashMap::with_capacity(capacity);

        for operation_name in operations {
            Self::validate_operation_name(name, operation_name)?;

            let routing_key = RoutingKey::compose(&prefix, operation_name);
            if index_by_routing_key.contains_key(routing_key.as_str()) {
                return Err(DuplicateRoutingKeyError {
                    registry_name: name,
                    operation_name,
                    routing_key: routing_key.into(),
                }
                .into());
            }

            let index = entries.len();
            index_by_operation.insert(operation_name, index);
            index_by_routing_key.insert(routing_key.as_str().to_string(), index);
            entries.push((operation_name, routing_key));
        }

        tracing::debug!(
            registry = name,
            %prefix,
            num_operations = entries.len(),
            "Message patterns registered"
        );

        Ok(Self {
            name,
            prefix,
            entries,
            index_by_operation,
            index_by_routing_key,
        })
    }

    fn validate_operation_name(
        registry_name: &'static str,
        operation_name: OperationName,
    ) -> Result<(), InvalidOperationNameError> {
        let maybe_reason = if operation_name.is_empty() {
            Some("must not be empty")
        } else if operation_name.contains(ROUTING_KEY_SEPARATOR) {
            Some("must not contain the routing key separator")
        } else {
            None
        };

        match maybe_reason {
            Some(reason) => Err(InvalidOperationNameError {
                registry_name,
                operation_name,
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix(&self) -> &ModulePrefix {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, operation_name: &str) -> bool {
        self.index_by_operation.contains_key(operation_name)
    }

    pub fn try_get(&self, operation_name: &str) -> Option<&RoutingKey> {
        self.index_by_operation
            .get(operation_name)
            .map(|index| &self.entries[*index].1)
    }

    pub fn get(&self, operation_name: &str) -> Result<&RoutingKey, UnknownOperationError> {
        self.try_get(operation_name)
            .ok_or_else(|| UnknownOperationError {
                registry_name: self.name,
                operation_name: operation_name.to_string(),
            })
    }

    /// Resolves an incoming routing key back into the operation it addresses
    pub fn operation_for(&self, routing_key: &str) -> Option<OperationName> {
        self.index_by_routing_key
            .get(routing_key)
            .map(|index| self.entries[*index].0)
    }

    pub fn iter(&self) -> PatternRegistryIter<'_> {
        PatternRegistryIter {
            inner: self.entries.iter(),
        }
    }

    pub fn operations(&self) -> impl ExactSizeIterator<Item = OperationName> + '_ {
        self.entries.iter().map(|(operation_name, _)| *operation_name)
    }

    pub fn routing_keys(&self) -> impl ExactSizeIterator<Item = &RoutingKey> + '_ {
        self.entries.iter().map(|(_, routing_key)| routing_key)
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = (OperationName, &'a RoutingKey);
    type IntoIter = PatternRegistryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PatternRegistryIter<'a> {
    inner: std::slice::Iter<'a, (OperationName, RoutingKey)>,
}

impl<'a> Iterator for PatternRegistryIter<'a> {
    type Item = (OperationName, &'a RoutingKey);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(operation_name, routing_key)| (*operation_name, routing_key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PatternRegistryIter<'_> {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
