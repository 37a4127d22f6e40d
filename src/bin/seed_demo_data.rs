// ABOUTME: Demo data seeder for the HealthHub pipeline
// ABOUTME: Provisions a demo user through the public flows and prints the home view
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Demo data seeder for HealthHub.
//!
//! Drives every public flow end-to-end against the configured store:
//! onboarding, activity profile, a week of intake and weight updates, then
//! one home refresh and the summary report histories.
//!
//! Usage:
//! ```bash
//! # Seed the in-memory store (exercises the pipeline, nothing persists)
//! cargo run --bin seed-demo-data
//!
//! # Seed a hosted store
//! STORE_URL=https://demo.firebaseio.com cargo run --bin seed-demo-data
//! ```

use anyhow::{Context, Result};
use chrono::Duration;
use tracing::info;

use healthhub::auth::{SessionProvider, StaticSession};
use healthhub::config::AppConfig;
use healthhub::keys::DayKeys;
use healthhub::models::{ActivityLevel, ActivityProfile, Sex, WeeklyGoal};
use healthhub::services::intake::IntakeService;
use healthhub::services::onboarding::{OnboardingService, PhysicalProfileInput};
use healthhub::services::reports::ReportService;
use healthhub::services::weight::WeightService;
use healthhub::store::Store;
use healthhub::summary::HomeRefresh;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.logging.init()?;
    config.log_summary();

    let store = Store::from_config(&config.store)?;
    let session = StaticSession::signed_in("demo-user");
    let user_id = session
        .current_user_id()
        .context("demo session has no user")?;

    let onboarding = OnboardingService::new(store.clone());
    let intake = IntakeService::new(store.clone());
    let weight = WeightService::new(store.clone());
    let reports = ReportService::new(store.clone());
    let refresh = HomeRefresh::new(store);

    let today = DayKeys::today();
    let week_ago = DayKeys::for_date(today.calendar_date() - Duration::days(7));

    onboarding
        .submit_physical_profile(
            &user_id,
            &week_ago,
            PhysicalProfileInput {
                full_name: "Demo User".into(),
                height_ft: 5,
                height_in: 10,
                current_weight: 180.0,
                goal_weight: 165.0,
                age: 30,
                weekly_goal: Some(WeeklyGoal::LoseOne),
            },
        )
        .await
        .context("onboarding failed")?;
    onboarding
        .submit_activity_profile(
            &user_id,
            &ActivityProfile {
                sex: Some(Sex::Male),
                activity_level: Some(ActivityLevel::Active),
                age: Some(30),
            },
        )
        .await
        .context("activity profile failed")?;
    info!("demo profile created");

    // A week of gradually improving numbers
    for offset in (0..7).rev() {
        let day = DayKeys::for_date(today.calendar_date() - Duration::days(offset));
        intake.add_calories(&user_id, &day, 1800 + offset * 50).await?;
        intake.set_miles(&user_id, &day, 2.0 + 0.5 * (6 - offset) as f64).await?;
        let sample = 180.0 - 0.3 * (6 - offset) as f64;
        let outcome = weight.record_weight(&user_id, &day, sample).await;
        if !outcome.fully_applied() {
            info!(date = day.date_key(), "weight update partially applied");
        }
    }
    info!("demo logs seeded");

    let view = refresh.refresh(&user_id, &today).await?;
    info!(
        name = view.summary.profile.full_name.as_deref().unwrap_or("-"),
        calories_today = view.summary.today_calories,
        miles_today = view.summary.today_miles,
        target = ?view.calorie_target.map(|t| t.target),
        "home view assembled"
    );

    let weights = reports.weight_history(&user_id).await?;
    let miles = reports.mile_history(&user_id).await?;
    info!(
        weight_samples = weights.len(),
        mile_entries = miles.len(),
        "summary report histories fetched"
    );

    session.sign_out();
    Ok(())
}
