// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use message_pattern::ModulePrefix;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Modules of the account service. The name of a module is the prefix of
/// every routing key it owns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum AccountModule {
    Profile,
}

impl AccountModule {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl From<AccountModule> for ModulePrefix {
    fn from(value: AccountModule) -> Self {
        ModulePrefix::new(value.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
