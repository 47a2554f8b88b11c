// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum PatternRegistryBuildError {
    #[error(transparent)]
    MissingPrefix(#[from] MissingPrefixError),

    #[error(transparent)]
    InvalidOperationName(#[from] InvalidOperationNameError),

    #[error(transparent)]
    DuplicateRoutingKey(#[from] DuplicateRoutingKeyError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Module prefix of message patterns '{registry_name}' is not defined")]
pub struct MissingPrefixError {
    pub registry_name: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Operation name '{operation_name}' in message patterns '{registry_name}' {reason}")]
pub struct InvalidOperationNameError {
    pub registry_name: &'static str,
    pub operation_name: &'static str,
    pub reason: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Routing key '{routing_key}' of operation '{operation_name}' is already registered in message \
     patterns '{registry_name}'"
)]
pub struct DuplicateRoutingKeyError {
    pub registry_name: &'static str,
    pub operation_name: &'static str,
    pub routing_key: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operation '{operation_name}' in message patterns '{registry_name}'")]
pub struct UnknownOperationError {
    pub registry_name: &'static str,
    pub operation_name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid routing key '{value}': expected '<prefix>/<operation>'")]
pub struct InvalidRoutingKeyError {
    pub value: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
