// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::CatalogBuilder;
use message_pattern::PatternRegistryBuildError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds the profile message patterns once and installs them into the
/// catalog. Fails when the configured patterns cannot be constructed, so the
/// process should not proceed with startup.
pub fn register_dependencies(
    b: &mut CatalogBuilder,
    config: &ProfileMessagePatternsConfig,
) -> Result<(), PatternRegistryBuildError> {
    let registry = ProfileMessagePatternRegistry::from_config(config)?;

    tracing::info!(
        prefix = %registry.prefix(),
        num_operations = registry.len(),
        "Registering profile message patterns"
    );

    b.add_value(registry);

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
