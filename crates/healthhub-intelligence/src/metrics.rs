// ABOUTME: BMR, maintenance-calorie, and calorie-target calculations
// ABOUTME: Mifflin-St Jeor with imperial inputs converted inline to metric
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Calorie-needs calculations.
//!
//! The three steps compose strictly in order:
//!
//! 1. [`compute_bmr`]: Mifflin-St Jeor basal metabolic rate
//! 2. [`apply_activity_multiplier`]: maintenance calories
//! 3. [`apply_weekly_goal_offset`]: daily calorie target
//!
//! [`daily_calorie_target`] runs the full composition. An absent input at
//! any step leaves the previously computed value as the best available
//! partial result; only a profile too incomplete for the BMR itself yields
//! no target at all.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use healthhub_core::models::{ActivityLevel, Sex, UserProfile, WeeklyGoal};
use serde::{Deserialize, Serialize};

/// Feet to centimeters
const FT_TO_CM: f64 = 30.48;
/// Inches to centimeters
const IN_TO_CM: f64 = 2.54;
/// Pounds to kilograms, truncated as the profile forms record it
const LB_TO_KG: f64 = 0.453;

/// The derived daily calorie goal with its intermediate steps.
///
/// Recomputed on every home refresh; never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieTarget {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Activity-adjusted maintenance calories, kcal/day (equals `bmr` when
    /// the activity level is absent or unrecognized)
    pub maintenance: f64,
    /// Weekly-goal-adjusted daily target, kcal/day (equals `maintenance`
    /// when the weekly goal is absent or unrecognized)
    pub target: f64,
}

/// Estimate basal metabolic rate with the Mifflin-St Jeor equation (1990).
///
/// Formula, with the imperial profile fields converted inline:
///
/// ```text
/// heightCm = heightFeet * 30.48 + heightInches * 2.54
/// weightKg = latestWeight * 0.453
/// bmr      = 10 * weightKg + 6.25 * heightCm - 5 * age + (Male: +5 | Female: -161)
/// ```
///
/// Requires height, age, a known sex, and a weight sample. Returns `None`
/// when any is missing: the intentionally incomplete-profile state, not an
/// error. [`Sex::Unknown`] counts as missing.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(profile: &UserProfile, latest_weight: Option<f64>) -> Option<f64> {
    let weight_lbs = latest_weight?;
    let height_feet = profile.height_feet?;
    let height_inches = profile.height_inches?;
    let age = profile.age?;
    let sex_constant = match profile.sex? {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
        Sex::Unknown => return None,
    };

    let height_cm = f64::from(height_feet) * FT_TO_CM + f64::from(height_inches) * IN_TO_CM;
    let weight_kg = weight_lbs * LB_TO_KG;

    Some(10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_constant)
}

/// Scale a BMR to maintenance calories by activity level.
///
/// Activity factors:
///
/// | Level           | Factor |
/// |-----------------|--------|
/// | Not Very Active | 1.2    |
/// | Lightly Active  | 1.375  |
/// | Active          | 1.55   |
/// | Very Active     | 1.725  |
///
/// An unrecognized level passes `bmr` through unchanged, a defined
/// fallback, not an error.
#[must_use]
pub fn apply_activity_multiplier(bmr: f64, level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::NotVeryActive => bmr * 1.2,
        ActivityLevel::LightlyActive => bmr * 1.375,
        ActivityLevel::Active => bmr * 1.55,
        ActivityLevel::VeryActive => bmr * 1.725,
        ActivityLevel::Unknown => bmr,
    }
}

/// Subtract the fixed daily deficit for a weekly weight-loss goal.
///
/// Deficits: 0.5 lb/week -> 250, 1 lb/week -> 500, 1.5 lb/week -> 750,
/// 2 lb/week -> 1000 kcal/day. An unrecognized goal applies no offset.
#[must_use]
pub fn apply_weekly_goal_offset(maintenance_calories: f64, goal: WeeklyGoal) -> f64 {
    match goal {
        WeeklyGoal::LoseHalf => maintenance_calories - 250.0,
        WeeklyGoal::LoseOne => maintenance_calories - 500.0,
        WeeklyGoal::LoseOneAndHalf => maintenance_calories - 750.0,
        WeeklyGoal::LoseTwo => maintenance_calories - 1000.0,
        WeeklyGoal::Unknown => maintenance_calories,
    }
}

/// Run the full BMR -> maintenance -> target composition.
///
/// Returns `None` only when the BMR itself cannot be computed. An absent
/// activity level or weekly goal skips that step and the previous value
/// carries forward, so `target` is always the best available partial result.
#[must_use]
pub fn daily_calorie_target(
    profile: &UserProfile,
    latest_weight: Option<f64>,
) -> Option<CalorieTarget> {
    let bmr = compute_bmr(profile, latest_weight)?;
    let maintenance = match profile.activity_level {
        Some(level) => apply_activity_multiplier(bmr, level),
        None => bmr,
    };
    let target = match profile.weekly_goal {
        Some(goal) => apply_weekly_goal_offset(maintenance, goal),
        None => maintenance,
    };
    Some(CalorieTarget {
        bmr,
        maintenance,
        target,
    })
}
