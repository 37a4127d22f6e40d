// ABOUTME: Profile onboarding with input validation and first-day log seeding
// ABOUTME: Physical profile submission seeds weight, caloric, and mile logs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Onboarding flows.
//!
//! A new user submits the physical profile form (name, height, age,
//! weights, weekly goal) and the activity profile (sex, activity level).
//! The physical submission also seeds today's three logs so the home
//! screen has data on first load: a weight sample at the submitted
//! current weight, and zeroed caloric and mile entries.

use healthhub_core::errors::{OnboardingError, ProfileValidationError, StoreError};
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{ActivityProfile, PhysicalProfile, WeeklyGoal};
use tracing::warn;

use crate::store::{Store, StoreProvider};

/// The onboarding form, pre-validation.
#[derive(Debug, Clone)]
pub struct PhysicalProfileInput {
    /// Display name
    pub full_name: String,
    /// Height, feet component
    pub height_ft: i32,
    /// Height, inches component
    pub height_in: i32,
    /// Current weight, pounds
    pub current_weight: f64,
    /// Goal weight, pounds
    pub goal_weight: f64,
    /// Age in years
    pub age: u32,
    /// Weekly goal as selected in the UI, if any
    pub weekly_goal: Option<WeeklyGoal>,
}

impl PhysicalProfileInput {
    /// Validate the form against the accepted ranges: height 3-8 ft with
    /// 0-11 in, age 18-99, both weights 50-300 lb.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if !(3..=8).contains(&self.height_ft) {
            return Err(ProfileValidationError::HeightFeetOutOfRange);
        }
        if !(0..=11).contains(&self.height_in) {
            return Err(ProfileValidationError::HeightInchesOutOfRange);
        }
        if !(18..=99).contains(&self.age) {
            return Err(ProfileValidationError::AgeOutOfRange);
        }
        let weight_ok = |weight: f64| (50.0..=300.0).contains(&weight);
        if !weight_ok(self.current_weight) || !weight_ok(self.goal_weight) {
            return Err(ProfileValidationError::WeightOutOfRange);
        }
        Ok(())
    }
}

/// Profile onboarding flow.
#[derive(Clone)]
pub struct OnboardingService {
    store: Store,
}

impl OnboardingService {
    /// Create the service over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Validate and store the physical profile, then seed today's logs.
    ///
    /// The profile write must succeed; seeding the weight, caloric, and
    /// mile logs is best-effort: each failure is logged with its path and
    /// the next refresh's initializer will fill the gap for the zeroed
    /// logs.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::Invalid`] for out-of-range input and
    /// [`OnboardingError::Store`] when the profile write fails.
    pub async fn submit_physical_profile(
        &self,
        user_id: &str,
        day: &DayKeys,
        input: PhysicalProfileInput,
    ) -> Result<(), OnboardingError> {
        input.validate()?;

        let profile = PhysicalProfile {
            full_name: Some(input.full_name),
            height_ft: Some(input.height_ft),
            height_in: Some(input.height_in),
            current_weight: Some(input.current_weight),
            goal_weight: Some(input.goal_weight),
            age: Some(input.age),
            weekly_goal: input.weekly_goal,
        };
        self.store.save_physical_profile(user_id, &profile).await?;

        let (weight_seed, caloric_seed, mile_seed) = tokio::join!(
            self.store.write_weight(user_id, day, input.current_weight),
            self.store.write_calories(user_id, day, 0.0),
            self.store.write_miles(user_id, day, 0.0),
        );
        for seed in [weight_seed, caloric_seed, mile_seed] {
            if let Err(err) = seed {
                warn!(error = %err, "failed to seed first-day log entry");
            }
        }

        Ok(())
    }

    /// Store the activity profile (sex, activity level, optional age).
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails.
    pub async fn submit_activity_profile(
        &self,
        user_id: &str,
        profile: &ActivityProfile,
    ) -> Result<(), StoreError> {
        self.store.save_activity_profile(user_id, profile).await
    }
}
