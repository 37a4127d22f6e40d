// ABOUTME: Integration tests for store backend selection and wire models
// ABOUTME: Covers connection-string detection, path layout, and enum serde
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use healthhub::config::StoreConfig;
use healthhub::errors::StoreError;
use healthhub::keys::DayKeys;
use healthhub::models::{ActivityLevel, ActivityProfile, Sex, WeeklyGoal};
use healthhub::store::{paths, MemoryStore, Store, StoreProvider, StoreType};
use serde_json::json;

fn config(url: &str) -> StoreConfig {
    StoreConfig {
        url: url.to_owned(),
        ..StoreConfig::default()
    }
}

// === Backend selection ===

#[test]
fn memory_scheme_selects_the_memory_backend() {
    let store = Store::from_config(&config("memory://")).unwrap();
    assert_eq!(store.store_type(), StoreType::Memory);
}

#[test]
fn https_scheme_selects_the_rest_backend() {
    let store = Store::from_config(&config("https://demo.firebaseio.com")).unwrap();
    assert_eq!(store.store_type(), StoreType::Firebase);
}

#[test]
fn unknown_scheme_is_rejected() {
    let err = Store::from_config(&config("postgres://nope")).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedUrl { .. }));
}

// === Path layout ===

#[test]
fn log_paths_embed_week_and_date_keys() {
    let day = DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
    assert_eq!(
        paths::caloric_log("u1", &day),
        "user-caloric-log/u1/2024-W20/2024-05-15"
    );
    assert_eq!(
        paths::mile_log("u1", &day),
        "user-mile-log/u1/2024-W20/2024-05-15"
    );
    assert_eq!(
        paths::weight_log("u1", &day),
        "user-weight-log/u1/2024-W20/2024-05-15"
    );
    assert_eq!(paths::physical_profile("u1"), "user-physical-profile/u1");
    assert_eq!(paths::activity_profile("u1"), "user-activity-profile/u1");
}

#[tokio::test]
async fn log_entries_store_their_single_field() {
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());
    let day = DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());

    store.write_calories("u1", &day, 420.0).await.unwrap();

    let node = memory.node(&paths::caloric_log("u1", &day)).unwrap();
    assert_eq!(node, json!({ "calories": 420.0 }));
}

#[tokio::test]
async fn integer_valued_log_fields_read_as_floats() {
    // The mobile clients historically wrote whole-number calorie totals
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());
    let day = DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());

    memory
        .put_node(&paths::caloric_log("u1", &day), json!({ "calories": 300 }))
        .unwrap();
    assert_eq!(store.read_calories("u1", &day).await.unwrap(), Some(300.0));
}

// === Wire enum handling ===

#[test]
fn profile_enums_serialize_to_the_stored_menu_strings() {
    assert_eq!(
        serde_json::to_value(ActivityLevel::NotVeryActive).unwrap(),
        json!("Not Very Active")
    );
    assert_eq!(
        serde_json::to_value(WeeklyGoal::LoseOneAndHalf).unwrap(),
        json!("Lose 1.5 pounds/week")
    );
    assert_eq!(serde_json::to_value(Sex::Female).unwrap(), json!("Female"));
}

#[test]
fn unrecognized_stored_strings_become_unknown() {
    let level: ActivityLevel = serde_json::from_value(json!("Extremely Active")).unwrap();
    assert_eq!(level, ActivityLevel::Unknown);

    let goal: WeeklyGoal = serde_json::from_value(json!("Lose 3 pounds/week")).unwrap();
    assert_eq!(goal, WeeklyGoal::Unknown);

    let sex: Sex = serde_json::from_value(json!("male")).unwrap();
    assert_eq!(sex, Sex::Unknown, "matching is case-sensitive like the source data");
}

#[tokio::test]
async fn activity_profile_tolerates_extra_stored_fields() {
    // The goals screen also stores a weightGoal child under this node
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());

    memory
        .put_node(
            "user-activity-profile/u1",
            json!({
                "sex": "Male",
                "activityLevel": "Very Active",
                "age": 30,
                "weightGoal": "Lose Weight"
            }),
        )
        .unwrap();

    let profile = store.load_activity_profile("u1").await.unwrap();
    assert_eq!(
        profile,
        ActivityProfile {
            sex: Some(Sex::Male),
            activity_level: Some(ActivityLevel::VeryActive),
            age: Some(30),
        }
    );
}

#[tokio::test]
async fn partially_populated_profile_reads_with_absent_fields() {
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());

    memory
        .put_node(
            "user-activity-profile/u1",
            json!({ "activityLevel": "Active" }),
        )
        .unwrap();

    let profile = store.load_activity_profile("u1").await.unwrap();
    assert_eq!(profile.activity_level, Some(ActivityLevel::Active));
    assert_eq!(profile.sex, None);
    assert_eq!(profile.age, None);
}
