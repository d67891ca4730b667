// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Memoized derived views over a cached Cosmos epochs query.
//!
//! An [`EpochCollection`] tracks the most recently fetched epochs response for
//! one chain and hands out one [`EpochView`] per epoch identifier. Views are
//! memoized (the same `Arc` is returned for the same identifier for the
//! lifetime of the collection) and hold no derived state of their own: every
//! accessor reads through to the collection's current response, so hydrating a
//! new response is all it takes for every outstanding view to observe fresh
//! data.
//!
//! Fetching is abstracted behind the [`QuerySource`] trait; retry, backoff,
//! cancellation, and response persistence all live behind that seam.

mod config;
mod epochs;
mod errors;
mod source;

pub use config::constants;
pub use epochs::types::{EpochRecord, EpochsResponse};
pub use epochs::view::EpochView;
pub use epochs::EpochCollection;
pub use errors::{EpochscanError, SourceError};
pub use source::QuerySource;
