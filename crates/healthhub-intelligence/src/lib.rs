// ABOUTME: Calorie-target computation engine for the HealthHub pipeline
// ABOUTME: Pure, synchronous arithmetic over profile data; no I/O
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # HealthHub Intelligence
//!
//! The metrics engine for the HealthHub pipeline: BMR estimation
//! (Mifflin-St Jeor), activity-level maintenance calories, and
//! weekly-goal-adjusted daily calorie targets.
//!
//! Every function in this crate is pure and synchronous. Missing profile
//! fields degrade the computation (a step skips itself) rather than failing
//! it; the result is recomputed on every refresh and never persisted.

pub mod metrics;

pub use metrics::{
    apply_activity_multiplier, apply_weekly_goal_offset, compute_bmr, daily_calorie_target,
    CalorieTarget,
};
