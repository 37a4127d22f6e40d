// ABOUTME: Store abstraction layer for the path-addressed health document store
// ABOUTME: Plugin architecture with in-memory and Firebase-style REST backends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Store abstraction for the hosted document database.
//!
//! All persistence routes through one logical store with path-addressed
//! nodes:
//!
//! - `user-physical-profile/{userId}`
//! - `user-activity-profile/{userId}`
//! - `user-caloric-log/{userId}/{yearWeek}/{date}` - field `calories`
//! - `user-mile-log/{userId}/{yearWeek}/{date}` - field `miles`
//! - `user-weight-log/{userId}/{yearWeek}/{date}` - field `weight`
//!
//! [`StoreProvider`] exposes typed operations over that scheme; the
//! [`Store`](factory::Store) enum selects a backend from the configured
//! connection string at runtime. No multi-key transactional guarantees are
//! assumed: each write target applies independently and may partially
//! succeed.

use async_trait::async_trait;
use chrono::NaiveDate;
use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{ActivityProfile, DatedSample, PhysicalProfile};
use serde_json::Value;

pub mod factory;
pub mod firebase;
pub mod memory;

pub use factory::{Store, StoreType};
pub use firebase::FirebaseStore;
pub use memory::MemoryStore;

/// Store path builders for the fixed node scheme.
pub mod paths {
    use healthhub_core::keys::DayKeys;

    /// `user-physical-profile/{userId}`
    #[must_use]
    pub fn physical_profile(user_id: &str) -> String {
        format!("user-physical-profile/{user_id}")
    }

    /// `user-activity-profile/{userId}`
    #[must_use]
    pub fn activity_profile(user_id: &str) -> String {
        format!("user-activity-profile/{user_id}")
    }

    /// `user-caloric-log/{userId}/{yearWeek}/{date}`
    #[must_use]
    pub fn caloric_log(user_id: &str, day: &DayKeys) -> String {
        format!(
            "user-caloric-log/{user_id}/{}/{}",
            day.year_week_key(),
            day.date_key()
        )
    }

    /// `user-mile-log/{userId}/{yearWeek}/{date}`
    #[must_use]
    pub fn mile_log(user_id: &str, day: &DayKeys) -> String {
        format!(
            "user-mile-log/{user_id}/{}/{}",
            day.year_week_key(),
            day.date_key()
        )
    }

    /// `user-weight-log/{userId}/{yearWeek}/{date}`
    #[must_use]
    pub fn weight_log(user_id: &str, day: &DayKeys) -> String {
        format!(
            "user-weight-log/{user_id}/{}/{}",
            day.year_week_key(),
            day.date_key()
        )
    }

    /// `user-weight-log/{userId}` - root of the user's weekly weight tree
    #[must_use]
    pub fn weight_log_root(user_id: &str) -> String {
        format!("user-weight-log/{user_id}")
    }

    /// `user-mile-log/{userId}` - root of the user's weekly mile tree
    #[must_use]
    pub fn mile_log_root(user_id: &str) -> String {
        format!("user-mile-log/{user_id}")
    }
}

/// Typed operations over the document store.
///
/// Missing nodes read as `None` (logs) or as empty profiles, mirroring the
/// store's nullable snapshots. Every error names the path it failed on so
/// sibling operations can proceed and report independently.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Read the physical profile node; an absent node is an empty profile.
    async fn load_physical_profile(&self, user_id: &str) -> Result<PhysicalProfile, StoreError>;

    /// Replace the physical profile node.
    async fn save_physical_profile(
        &self,
        user_id: &str,
        profile: &PhysicalProfile,
    ) -> Result<(), StoreError>;

    /// Read the activity profile node; an absent node is an empty profile.
    async fn load_activity_profile(&self, user_id: &str) -> Result<ActivityProfile, StoreError>;

    /// Replace the activity profile node.
    async fn save_activity_profile(
        &self,
        user_id: &str,
        profile: &ActivityProfile,
    ) -> Result<(), StoreError>;

    /// Set only the `currentWeight` field of the physical profile.
    async fn update_current_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError>;

    /// Set only the `goalWeight` field of the physical profile.
    async fn update_goal_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError>;

    /// Read the `calories` field of the day's caloric log, if the entry exists.
    async fn read_calories(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError>;

    /// Write the day's caloric log entry.
    async fn write_calories(
        &self,
        user_id: &str,
        day: &DayKeys,
        calories: f64,
    ) -> Result<(), StoreError>;

    /// Read the `miles` field of the day's mile log, if the entry exists.
    async fn read_miles(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError>;

    /// Write the day's mile log entry.
    async fn write_miles(&self, user_id: &str, day: &DayKeys, miles: f64)
        -> Result<(), StoreError>;

    /// Read the `weight` field of the day's weight log, if the entry exists.
    async fn read_weight(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError>;

    /// Write the day's weight log entry.
    async fn write_weight(
        &self,
        user_id: &str,
        day: &DayKeys,
        weight: f64,
    ) -> Result<(), StoreError>;

    /// All weight samples for the user, flattened across weeks and sorted by
    /// date. Entries with unparseable dates or missing values are skipped.
    async fn weight_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError>;

    /// All mile entries for the user, flattened across weeks and sorted by
    /// date. Entries with unparseable dates or missing values are skipped.
    async fn mile_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError>;

    /// The weight sample the metrics engine should use: today's entry when
    /// present, otherwise the most recent sample on or before `day`.
    async fn latest_weight(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        if let Some(weight) = self.read_weight(user_id, day).await? {
            return Ok(Some(weight));
        }
        let history = self.weight_history(user_id).await?;
        Ok(history
            .iter()
            .rev()
            .find(|sample| sample.date <= day.calendar_date())
            .map(|sample| sample.value))
    }
}

/// Flatten a `{yearWeek: {date: {field: value}}}` tree into date-sorted
/// samples, skipping entries whose date key or value does not parse.
pub(crate) fn flatten_week_tree(root: &Value, field: &str) -> Vec<DatedSample> {
    let mut samples = Vec::new();
    let Some(weeks) = root.as_object() else {
        return samples;
    };
    for week in weeks.values() {
        let Some(days) = week.as_object() else {
            continue;
        };
        for (date_key, entry) in days {
            let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d") else {
                continue;
            };
            let Some(value) = entry.get(field).and_then(Value::as_f64) else {
                continue;
            };
            samples.push(DatedSample { date, value });
        }
    }
    samples.sort_by_key(|sample| sample.date);
    samples
}
