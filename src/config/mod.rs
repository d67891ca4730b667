// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration constants for epochscan.

pub mod constants;
