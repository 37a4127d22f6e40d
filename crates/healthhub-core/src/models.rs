// ABOUTME: Data models for user profiles, daily logs, and assembled summaries
// ABOUTME: Wire models mirror the document store's camelCase field names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Core data structures for the health-tracking pipeline.
//!
//! ## Design Principles
//!
//! - **Optional everywhere**: every profile field is independently optional.
//!   Computations that need a field skip themselves when it is absent rather
//!   than failing the pipeline.
//! - **Closed enums**: the store holds free-form strings for sex, activity
//!   level, and weekly goal. Those are parsed into closed enums with an
//!   explicit [`Unknown`](Sex::Unknown) variant so an unrecognized value is a
//!   matched case with a defined fallback, not a silently skipped branch.
//! - **Wire fidelity**: `PhysicalProfile` and `ActivityProfile` serialize to
//!   exactly the camelCase field names the store nodes carry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Biological sex as recorded on the activity profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    /// Male (+5 constant in the Mifflin-St Jeor equation)
    Male,
    /// Female (-161 constant in the Mifflin-St Jeor equation)
    Female,
    /// Any stored value that matches neither known sex; BMR computation
    /// treats this as a missing field
    #[serde(other)]
    Unknown,
}

/// Self-reported activity level, stored as a free-form menu string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise (x1.2)
    #[serde(rename = "Not Very Active")]
    NotVeryActive,
    /// Light exercise a few days a week (x1.375)
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    /// Regular exercise (x1.55)
    Active,
    /// Hard exercise most days (x1.725)
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Unrecognized stored value; the multiplier step passes the input
    /// through unchanged
    #[serde(other)]
    Unknown,
}

/// Weekly weight-loss goal, stored as a free-form menu string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeeklyGoal {
    /// Lose 0.5 lb/week (-250 kcal/day)
    #[serde(rename = "Lose 0.5 pound/week")]
    LoseHalf,
    /// Lose 1 lb/week (-500 kcal/day)
    #[serde(rename = "Lose 1 pound/week")]
    LoseOne,
    /// Lose 1.5 lb/week (-750 kcal/day)
    #[serde(rename = "Lose 1.5 pounds/week")]
    LoseOneAndHalf,
    /// Lose 2 lb/week (-1000 kcal/day)
    #[serde(rename = "Lose 2 pounds/week")]
    LoseTwo,
    /// Unrecognized stored value; no deficit is applied
    #[serde(other)]
    Unknown,
}

/// Physical profile node at `user-physical-profile/{userId}`.
///
/// All fields are independently optional; a freshly created account has an
/// empty node and every field reads as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalProfile {
    /// Display name
    pub full_name: Option<String>,
    /// Height, feet component
    pub height_ft: Option<i32>,
    /// Height, inches component (expected in 0..=11)
    pub height_in: Option<i32>,
    /// Most recently recorded weight, pounds
    pub current_weight: Option<f64>,
    /// Target weight, pounds
    pub goal_weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Weekly weight-loss goal
    pub weekly_goal: Option<WeeklyGoal>,
}

/// Activity profile node at `user-activity-profile/{userId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityProfile {
    /// Biological sex
    pub sex: Option<Sex>,
    /// Self-reported activity level
    pub activity_level: Option<ActivityLevel>,
    /// Age in years (also present on the physical profile, which wins)
    pub age: Option<u32>,
}

/// Merged in-memory view of both profile nodes.
///
/// This is the value threaded through the pipeline stages; it is never
/// written back to the store as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub full_name: Option<String>,
    /// Height, feet component
    pub height_feet: Option<i32>,
    /// Height, inches component
    pub height_inches: Option<i32>,
    /// Most recently recorded weight, pounds
    pub current_weight: Option<f64>,
    /// Target weight, pounds
    pub goal_weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Self-reported activity level
    pub activity_level: Option<ActivityLevel>,
    /// Weekly weight-loss goal
    pub weekly_goal: Option<WeeklyGoal>,
}

impl UserProfile {
    /// Merge the two profile nodes into the pipeline view.
    ///
    /// Age appears on both nodes; the physical profile takes precedence
    /// since that is the one the onboarding flow populates.
    #[must_use]
    pub fn merge(physical: PhysicalProfile, activity: ActivityProfile) -> Self {
        Self {
            full_name: physical.full_name,
            height_feet: physical.height_ft,
            height_inches: physical.height_in,
            current_weight: physical.current_weight,
            goal_weight: physical.goal_weight,
            age: physical.age.or(activity.age),
            sex: activity.sex,
            activity_level: activity.activity_level,
            weekly_goal: physical.weekly_goal,
        }
    }
}

/// One flattened history point from a weekly log tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DatedSample {
    /// Calendar date the value was logged under
    pub date: NaiveDate,
    /// Logged value (pounds or miles, depending on the log)
    pub value: f64,
}

/// The assembled home-view model: profile plus today's log totals.
///
/// Delivered only once all four underlying reads complete; a partially
/// populated summary is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Merged user profile
    pub profile: UserProfile,
    /// Calories eaten today (missing log reads as 0.0)
    pub today_calories: f64,
    /// Miles run today (missing log reads as 0.0)
    pub today_miles: f64,
}
