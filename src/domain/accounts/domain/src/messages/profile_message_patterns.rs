// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use lazy_static::lazy_static;
use message_pattern::{
    ModulePrefix,
    PatternRegistry,
    PatternRegistryBuildError,
    RoutingKey,
    UnknownOperationError,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{AccountModule, ProfileMessagePatternsConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PROFILE_MESSAGE_PATTERNS_NAME: &str = "ProfileMsgPattern";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

lazy_static! {
    /// Profile message patterns under the [`AccountModule::Profile`] prefix,
    /// shared by the whole process
    pub static ref PROFILE_MSG_PATTERN: ProfileMessagePatternRegistry =
        ProfileMessagePatternRegistry::new(Some(AccountModule::Profile.into()))
            .expect("Profile message patterns must be valid");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Operations published by the profile module.
///
/// Variant names are the operation segments of routing keys and are part of
/// the wire contract, including the `Achivement` spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum ProfileOperation {
    UpdateExp,
    UpdateStreak,
    UpdateRealm,
    UpdatePersonal,
    Deactivate,

    AddAchivement,
    RemoveAchivement,

    AddMaterialArt,
    RemoveMaterialArt,
}

impl ProfileOperation {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct ProfileMessagePatternRegistry {
    patterns: PatternRegistry,
}

impl ProfileMessagePatternRegistry {
    pub fn new(maybe_prefix: Option<ModulePrefix>) -> Result<Self, PatternRegistryBuildError> {
        let patterns = PatternRegistry::new(
            PROFILE_MESSAGE_PATTERNS_NAME,
            maybe_prefix,
            ProfileOperation::iter().map(ProfileOperation::as_str),
        )?;

        Ok(Self { patterns })
    }

    pub fn from_config(
        config: &ProfileMessagePatternsConfig,
    ) -> Result<Self, PatternRegistryBuildError> {
        Self::new(config.module_prefix.clone())
    }

    pub fn prefix(&self) -> &ModulePrefix {
        self.patterns.prefix()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, operation_name: &str) -> Result<&RoutingKey, UnknownOperationError> {
        self.patterns.get(operation_name)
    }

    pub fn routing_key(&self, operation: ProfileOperation) -> &RoutingKey {
        self.patterns
            .try_get(operation.as_str())
            .expect("Every profile operation must be registered")
    }

    pub fn operation_for(&self, routing_key: &str) -> Option<ProfileOperation> {
        self.patterns
            .operation_for(routing_key)
            .and_then(|operation_name| operation_name.parse().ok())
    }

    /// Pairs in declaration order of [`ProfileOperation`]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ProfileOperation, &RoutingKey)> + '_ {
        ProfileOperation::iter().zip(self.patterns.routing_keys())
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
