// ABOUTME: Home summary assembly and the full refresh orchestration
// ABOUTME: Fans out the four profile/log reads and projects the calorie target
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Summary assembly.
//!
//! [`SummaryAssembler`] fetches the physical profile, activity profile,
//! today's caloric log, and today's mile log for one user. The four reads
//! are independent, so they are issued concurrently and joined; the
//! [`Summary`] is built only once all four complete, so a partially
//! populated result is never observable. Any single failure is logged at
//! its source and surfaced as [`SummaryError::FetchFailed`] naming the
//! read that failed; the caller decides whether to retry or show stale
//! data.
//!
//! [`HomeRefresh`] is the per-refresh pipeline: log initialization,
//! summary assembly, latest weight lookup, and the calorie-target
//! computation, in that order.
//!
//! Cancellation: assembly is an ordinary future. Dropping it (e.g. the
//! user navigated away) cancels the in-flight store reads at the next
//! await point and nothing is delivered afterward.

use healthhub_core::errors::{StoreError, SummaryError, SummarySource};
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{Summary, UserProfile};
use healthhub_intelligence::metrics::{daily_calorie_target, CalorieTarget};
use tracing::warn;

use crate::daily_logs::DailyLogInitializer;
use crate::store::{Store, StoreProvider};

/// The view-model delivered to the UI collaborator per refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    /// Profile plus today's log totals
    pub summary: Summary,
    /// Derived calorie target; `None` while the profile is incomplete
    pub calorie_target: Option<CalorieTarget>,
}

/// Assembles the home [`Summary`] from the four independent reads.
#[derive(Clone)]
pub struct SummaryAssembler {
    store: Store,
}

impl SummaryAssembler {
    /// Create an assembler over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Fetch profile and today's logs, delivering a complete [`Summary`]
    /// or the first failed source.
    ///
    /// All four reads run to completion even when one fails, so each
    /// failure is logged at its own path; the returned error names the
    /// first failure in the fixed order physical profile, activity
    /// profile, caloric log, mile log.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::FetchFailed`] when any read fails.
    pub async fn assemble(&self, user_id: &str, day: &DayKeys) -> Result<Summary, SummaryError> {
        let (physical, activity, calories, miles) = tokio::join!(
            self.store.load_physical_profile(user_id),
            self.store.load_activity_profile(user_id),
            self.store.read_calories(user_id, day),
            self.store.read_miles(user_id, day),
        );

        let physical = checked(physical, SummarySource::PhysicalProfile);
        let activity = checked(activity, SummarySource::ActivityProfile);
        let calories = checked(calories, SummarySource::CaloricLog);
        let miles = checked(miles, SummarySource::MileLog);

        Ok(Summary {
            profile: UserProfile::merge(physical?, activity?),
            today_calories: calories?.unwrap_or(0.0),
            today_miles: miles?.unwrap_or(0.0),
        })
    }
}

/// Log a failed read at its source and convert it for the caller.
fn checked<T>(result: Result<T, StoreError>, kind: SummarySource) -> Result<T, SummaryError> {
    result.map_err(|cause| {
        warn!(source = %kind, error = %cause, "summary read failed");
        SummaryError::FetchFailed { kind, cause }
    })
}

/// The full home-screen refresh pipeline.
#[derive(Clone)]
pub struct HomeRefresh {
    store: Store,
    initializer: DailyLogInitializer,
    assembler: SummaryAssembler,
}

impl HomeRefresh {
    /// Create the refresh pipeline over `store`.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            initializer: DailyLogInitializer::new(store.clone()),
            assembler: SummaryAssembler::new(store.clone()),
            store,
        }
    }

    /// Run one refresh cycle for `user_id` and `day`:
    /// initialize today's logs (best-effort), assemble the summary, look up
    /// the latest weight sample, and compute the calorie target.
    ///
    /// A failed weight-log read is logged and treated as no sample; the
    /// calorie target degrades to `None` instead of failing the refresh.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::FetchFailed`] when the summary itself cannot
    /// be assembled.
    pub async fn refresh(&self, user_id: &str, day: &DayKeys) -> Result<HomeView, SummaryError> {
        self.initializer.ensure_today_initialized(user_id, day).await;

        let summary = self.assembler.assemble(user_id, day).await?;

        let latest_weight = match self.store.latest_weight(user_id, day).await {
            Ok(weight) => weight,
            Err(err) => {
                warn!(error = %err, "error reading weight log, skipping calorie target");
                None
            }
        };

        let calorie_target = daily_calorie_target(&summary.profile, latest_weight);

        Ok(HomeView {
            summary,
            calorie_target,
        })
    }
}
