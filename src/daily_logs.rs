// ABOUTME: Idempotent initialization of today's caloric and mile log entries
// ABOUTME: Best-effort creation with zero defaults before any read or update
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Daily log initialization.
//!
//! Each home refresh starts by making sure today's caloric and mile log
//! entries exist, so later reads and read-modify-write updates see a zero
//! record instead of a missing one. Initialization is best-effort: a store
//! failure is logged with the failing path and the caller proceeds, since
//! every downstream read treats a missing entry as 0.0 anyway.

use healthhub_core::keys::DayKeys;
use tracing::{debug, warn};

use crate::store::{paths, Store, StoreProvider};

/// Ensures today's log entries exist before the pipeline touches them.
#[derive(Clone)]
pub struct DailyLogInitializer {
    store: Store,
}

impl DailyLogInitializer {
    /// Create an initializer over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create today's caloric and mile log entries with zero defaults if
    /// they do not exist yet.
    ///
    /// Idempotent: an existing entry is never overwritten, so calling this
    /// twice in the same day performs exactly one creation write per log.
    /// Never fails the caller; store errors are logged and swallowed.
    pub async fn ensure_today_initialized(&self, user_id: &str, day: &DayKeys) {
        match self.store.read_calories(user_id, day).await {
            Ok(Some(_)) => {}
            Ok(None) => match self.store.write_calories(user_id, day, 0.0).await {
                Ok(()) => debug!("initialized daily calories to zero"),
                Err(err) => warn!(
                    path = %paths::caloric_log(user_id, day),
                    error = %err,
                    "failed to initialize daily calories"
                ),
            },
            Err(err) => warn!(
                path = %paths::caloric_log(user_id, day),
                error = %err,
                "error checking caloric log, skipping initialization"
            ),
        }

        match self.store.read_miles(user_id, day).await {
            Ok(Some(_)) => {}
            Ok(None) => match self.store.write_miles(user_id, day, 0.0).await {
                Ok(()) => debug!("initialized daily miles to zero"),
                Err(err) => warn!(
                    path = %paths::mile_log(user_id, day),
                    error = %err,
                    "failed to initialize daily miles"
                ),
            },
            Err(err) => warn!(
                path = %paths::mile_log(user_id, day),
                error = %err,
                "error checking mile log, skipping initialization"
            ),
        }
    }
}
