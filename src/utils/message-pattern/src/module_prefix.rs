// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Namespace segment identifying the module that owns a set of message
/// patterns, i.e. `Profile` in `Profile/UpdateExp`.
///
/// Content is not validated: an empty prefix yields keys like `/Deactivate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePrefix(String);

impl ModulePrefix {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for ModulePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModulePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModulePrefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModulePrefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
