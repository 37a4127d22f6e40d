// ABOUTME: Weight update flow with per-target outcome reporting
// ABOUTME: Profile write and weight-log append are independent; goal check follows
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Weight updates.
//!
//! Recording a weight touches two store targets: the profile's
//! `currentWeight` field and a new weight-log sample for today. The writes
//! are independent and may partially succeed (there is no multi-key
//! transaction), so the outcome reports each target separately and a
//! failure in one never masks a failure in the other.

use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;
use tracing::warn;

use crate::store::{Store, StoreProvider};

/// Per-target outcome of one weight update.
#[derive(Debug)]
pub struct WeightUpdateOutcome {
    /// Result of the profile `currentWeight` write
    pub profile_write: Result<(), StoreError>,
    /// Result of the weight-log sample write
    pub log_write: Result<(), StoreError>,
    /// Set when the profile write succeeded and the new weight is at or
    /// below the goal weight; the caller owns what happens next
    pub goal_reached: bool,
}

impl WeightUpdateOutcome {
    /// Whether both writes applied.
    #[must_use]
    pub const fn fully_applied(&self) -> bool {
        self.profile_write.is_ok() && self.log_write.is_ok()
    }
}

/// Weight update and goal management flow.
#[derive(Clone)]
pub struct WeightService {
    store: Store,
}

impl WeightService {
    /// Create the service over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Record `new_weight`: update the profile's current weight and append
    /// today's weight-log sample, reporting each write separately.
    ///
    /// The goal comparison (`new_weight <= goal_weight`) runs only after a
    /// successful profile write, against the goal weight read before the
    /// update. A profile read failure is logged and disables the goal check
    /// without blocking either write.
    pub async fn record_weight(
        &self,
        user_id: &str,
        day: &DayKeys,
        new_weight: f64,
    ) -> WeightUpdateOutcome {
        let goal_weight = match self.store.load_physical_profile(user_id).await {
            Ok(profile) => profile.goal_weight,
            Err(err) => {
                warn!(error = %err, "error reading profile, goal check disabled");
                None
            }
        };

        let (profile_write, log_write) = tokio::join!(
            self.store.update_current_weight(user_id, new_weight),
            self.store.write_weight(user_id, day, new_weight),
        );

        if let Err(err) = &profile_write {
            warn!(error = %err, "failed to update profile weight");
        }
        if let Err(err) = &log_write {
            warn!(error = %err, "failed to append weight log sample");
        }

        let goal_reached = profile_write.is_ok()
            && goal_weight.is_some_and(|goal| new_weight <= goal);

        WeightUpdateOutcome {
            profile_write,
            log_write,
            goal_reached,
        }
    }

    /// Set a new goal weight after the previous one was reached.
    ///
    /// # Errors
    ///
    /// Returns the store error when the single-field write fails.
    pub async fn update_goal_weight(&self, user_id: &str, new_goal: f64) -> Result<(), StoreError> {
        self.store.update_goal_weight(user_id, new_goal).await
    }
}
