// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::env::VarError;

use message_pattern::ModulePrefix;
use serde::Deserialize;

use crate::AccountModule;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const ENV_VAR_ACCOUNT_PROFILE_MODULE_PREFIX: &str = "ACCOUNT_PROFILE_MODULE_PREFIX";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProfileMessagePatternsConfig {
    /// Absent prefix is reported when the registry gets constructed
    #[serde(default)]
    pub module_prefix: Option<ModulePrefix>,
}

impl ProfileMessagePatternsConfig {
    pub fn new(maybe_module_prefix: Option<ModulePrefix>) -> Self {
        Self {
            module_prefix: maybe_module_prefix,
        }
    }

    pub fn load_from_env() -> Self {
        Self::from_env_value(std::env::var(ENV_VAR_ACCOUNT_PROFILE_MODULE_PREFIX))
    }

    /// Unset variable falls back to [`AccountModule::Profile`]. A value that
    /// is not valid unicode leaves the prefix absent, so the registry refuses
    /// to be constructed from it.
    pub fn from_env_value(env_value: Result<String, VarError>) -> Self {
        match env_value {
            Ok(module_prefix) => Self::new(Some(module_prefix.into())),
            Err(VarError::NotPresent) => Self::default(),
            Err(VarError::NotUnicode(raw)) => {
                tracing::error!(
                    env_var = ENV_VAR_ACCOUNT_PROFILE_MODULE_PREFIX,
                    value = ?raw,
                    "Module prefix of profile message patterns is not valid unicode"
                );
                Self::new(None)
            }
        }
    }
}

impl Default for ProfileMessagePatternsConfig {
    fn default() -> Self {
        Self::new(Some(AccountModule::Profile.into()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
