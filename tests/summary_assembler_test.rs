// ABOUTME: Integration tests for summary assembly and the home refresh pipeline
// ABOUTME: Covers fan-out joins, FetchFailed source naming, and target projection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use healthhub::errors::{SummaryError, SummarySource};
use healthhub::keys::DayKeys;
use healthhub::models::{ActivityLevel, ActivityProfile, PhysicalProfile, Sex, WeeklyGoal};
use healthhub::store::{MemoryStore, Store, StoreProvider};
use healthhub::summary::{HomeRefresh, SummaryAssembler};

const USER: &str = "user-1";

fn day() -> DayKeys {
    DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
}

fn memory_backed() -> (MemoryStore, Store) {
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());
    (memory, store)
}

async fn seed_profiles(store: &Store) {
    store
        .save_physical_profile(
            USER,
            &PhysicalProfile {
                full_name: Some("Test User".to_owned()),
                height_ft: Some(5),
                height_in: Some(10),
                current_weight: Some(180.0),
                goal_weight: Some(165.0),
                age: Some(30),
                weekly_goal: Some(WeeklyGoal::LoseOne),
            },
        )
        .await
        .unwrap();
    store
        .save_activity_profile(
            USER,
            &ActivityProfile {
                sex: Some(Sex::Male),
                activity_level: Some(ActivityLevel::Active),
                age: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn assembles_profile_and_todays_logs() {
    let (_, store) = memory_backed();
    let day = day();
    seed_profiles(&store).await;
    store.write_calories(USER, &day, 1200.0).await.unwrap();
    store.write_miles(USER, &day, 2.5).await.unwrap();

    let summary = SummaryAssembler::new(store).assemble(USER, &day).await.unwrap();

    assert_eq!(summary.profile.full_name.as_deref(), Some("Test User"));
    assert_eq!(summary.profile.sex, Some(Sex::Male));
    assert_eq!(summary.profile.weekly_goal, Some(WeeklyGoal::LoseOne));
    assert!((summary.today_calories - 1200.0).abs() < f64::EPSILON);
    assert!((summary.today_miles - 2.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn missing_logs_read_as_zero() {
    let (_, store) = memory_backed();
    seed_profiles(&store).await;

    let summary = SummaryAssembler::new(store)
        .assemble(USER, &day())
        .await
        .unwrap();

    assert!((summary.today_calories).abs() < f64::EPSILON);
    assert!((summary.today_miles).abs() < f64::EPSILON);
}

#[tokio::test]
async fn brand_new_user_gets_an_empty_profile() {
    let (_, store) = memory_backed();
    let summary = SummaryAssembler::new(store)
        .assemble(USER, &day())
        .await
        .unwrap();
    assert_eq!(summary.profile.full_name, None);
    assert_eq!(summary.profile.sex, None);
}

#[tokio::test]
async fn failed_read_names_its_source() {
    let cases = [
        ("user-physical-profile/", SummarySource::PhysicalProfile),
        ("user-activity-profile/", SummarySource::ActivityProfile),
        ("user-caloric-log/", SummarySource::CaloricLog),
        ("user-mile-log/", SummarySource::MileLog),
    ];

    for (prefix, expected) in cases {
        let (memory, store) = memory_backed();
        seed_profiles(&store).await;
        memory.fail_reads_under(prefix);

        let err = SummaryAssembler::new(store)
            .assemble(USER, &day())
            .await
            .unwrap_err();
        let SummaryError::FetchFailed { kind, .. } = err;
        assert_eq!(kind, expected, "failing prefix {prefix}");
    }
}

#[tokio::test]
async fn refresh_projects_the_calorie_target() {
    let (_, store) = memory_backed();
    let day = day();
    seed_profiles(&store).await;
    store.write_weight(USER, &day, 180.0).await.unwrap();

    let view = HomeRefresh::new(store).refresh(USER, &day).await.unwrap();

    let target = view.calorie_target.expect("complete profile has a target");
    // 1781.65 kcal BMR x 1.55 activity factor - 500 kcal weekly-goal deficit
    assert!((target.target - 2261.5575).abs() < 1e-2, "got {}", target.target);
    // Refresh also initialized today's logs
    assert!((view.summary.today_calories).abs() < f64::EPSILON);
}

#[tokio::test]
async fn refresh_without_weight_sample_skips_the_target() {
    let (_, store) = memory_backed();
    let day = day();
    seed_profiles(&store).await;

    let view = HomeRefresh::new(store).refresh(USER, &day).await.unwrap();
    assert!(view.calorie_target.is_none());
}

#[tokio::test]
async fn refresh_falls_back_to_most_recent_weight_sample() {
    let (_, store) = memory_backed();
    let day = day();
    seed_profiles(&store).await;

    let earlier = DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    store.write_weight(USER, &earlier, 178.0).await.unwrap();

    let view = HomeRefresh::new(store).refresh(USER, &day).await.unwrap();
    let target = view.calorie_target.expect("historical sample feeds the BMR");
    // 178 lb instead of 180 lb shifts the BMR by 10 * 2 * 0.453 kcal
    assert!((target.bmr - (1781.65 - 9.06)).abs() < 1e-2);
}

#[tokio::test]
async fn refresh_survives_a_failed_weight_log_read() {
    let (memory, store) = memory_backed();
    let day = day();
    seed_profiles(&store).await;
    memory.fail_reads_under("user-weight-log/");

    let view = HomeRefresh::new(store).refresh(USER, &day).await.unwrap();
    assert!(
        view.calorie_target.is_none(),
        "weight read failure degrades to no target, not an error"
    );
}
