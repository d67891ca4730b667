// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known paths and constants.
//!
//! This module centralizes magic constants used throughout the epochscan
//! crate, improving discoverability and maintainability.

/// LCD query path of the epochs module.
///
/// [`QuerySource`](crate::QuerySource) implementations resolve this path
/// against the chain's REST endpoint.
pub const EPOCHS_QUERY_PATH: &str = "/osmosis/epochs/v1beta1/epochs";

/// Suffix the upstream protobuf JSON serializer appends to second-granularity
/// duration strings.
pub const DURATION_SECONDS_SUFFIX: &str = "s";
