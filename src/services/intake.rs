// ABOUTME: Daily calorie and mile intake updates
// ABOUTME: Calories accumulate via read-modify-write; miles overwrite
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Intake updates for today's logs.

use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;

use crate::store::{Store, StoreProvider};

/// Calorie and mile update flow.
#[derive(Clone)]
pub struct IntakeService {
    store: Store,
}

impl IntakeService {
    /// Create the service over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Add `delta` calories to today's total and return the stored sum.
    ///
    /// The increment is computed client-side from a fresh read (a missing
    /// entry reads as 0), then written back. Concurrent updates for the
    /// same user and day can race, last write wins; callers that need
    /// stronger guarantees must serialize their own updates.
    ///
    /// # Errors
    ///
    /// Returns the store error when the read or the write-back fails.
    pub async fn add_calories(
        &self,
        user_id: &str,
        day: &DayKeys,
        delta: i64,
    ) -> Result<f64, StoreError> {
        let current = self
            .store
            .read_calories(user_id, day)
            .await?
            .unwrap_or(0.0);
        let updated = current + delta as f64;
        self.store.write_calories(user_id, day, updated).await?;
        Ok(updated)
    }

    /// Overwrite today's mile total (not additive).
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails.
    pub async fn set_miles(&self, user_id: &str, day: &DayKeys, miles: f64) -> Result<(), StoreError> {
        self.store.write_miles(user_id, day, miles).await
    }
}
