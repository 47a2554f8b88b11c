// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{InvalidRoutingKeyError, ModulePrefix};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ROUTING_KEY_SEPARATOR: char = '/';

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fully-qualified identifier of a message type: `<prefix>/<operation>`.
///
/// The operation segment never contains the separator, so the key is always
/// split at its last `/`, even when the prefix itself contains one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutingKey(String);

impl RoutingKey {
    pub(crate) fn compose(prefix: &ModulePrefix, operation_name: &str) -> Self {
        Self(format!("{prefix}{ROUTING_KEY_SEPARATOR}{operation_name}"))
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidRoutingKeyError> {
        let value = value.into();
        match value.rsplit_once(ROUTING_KEY_SEPARATOR) {
            Some((_, operation_name)) if !operation_name.is_empty() => Ok(Self(value)),
            _ => Err(InvalidRoutingKeyError { value }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn prefix(&self) -> &str {
        self.split().0
    }

    pub fn operation(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.0
            .rsplit_once(ROUTING_KEY_SEPARATOR)
            .expect("Routing key must contain a separator")
    }
}

impl AsRef<str> for RoutingKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for RoutingKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoutingKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for RoutingKey {
    type Error = InvalidRoutingKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for RoutingKey {
    type Err = InvalidRoutingKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RoutingKey> for String {
    fn from(value: RoutingKey) -> Self {
        value.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
