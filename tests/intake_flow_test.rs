// ABOUTME: Integration tests for calorie and mile intake updates
// ABOUTME: Verifies cumulative calorie read-modify-write and mile overwrite
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use healthhub::daily_logs::DailyLogInitializer;
use healthhub::keys::DayKeys;
use healthhub::services::intake::IntakeService;
use healthhub::store::{MemoryStore, Store, StoreProvider};

const USER: &str = "user-1";

fn day() -> DayKeys {
    DayKeys::for_date(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
}

fn memory_backed() -> (MemoryStore, Store) {
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());
    (memory, store)
}

#[tokio::test]
async fn sequential_calorie_updates_accumulate() {
    let (_, store) = memory_backed();
    let day = day();
    DailyLogInitializer::new(store.clone())
        .ensure_today_initialized(USER, &day)
        .await;
    let intake = IntakeService::new(store.clone());

    let first = intake.add_calories(USER, &day, 100).await.unwrap();
    assert!((first - 100.0).abs() < f64::EPSILON);

    let second = intake.add_calories(USER, &day, 200).await.unwrap();
    assert!((second - 300.0).abs() < f64::EPSILON);

    assert_eq!(store.read_calories(USER, &day).await.unwrap(), Some(300.0));
}

#[tokio::test]
async fn calorie_update_treats_missing_entry_as_zero() {
    let (_, store) = memory_backed();
    let day = day();
    let total = IntakeService::new(store)
        .add_calories(USER, &day, 250)
        .await
        .unwrap();
    assert!((total - 250.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn negative_delta_reduces_the_total() {
    let (_, store) = memory_backed();
    let day = day();
    let intake = IntakeService::new(store);
    intake.add_calories(USER, &day, 500).await.unwrap();
    let total = intake.add_calories(USER, &day, -120).await.unwrap();
    assert!((total - 380.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn miles_overwrite_instead_of_accumulating() {
    let (_, store) = memory_backed();
    let day = day();
    let intake = IntakeService::new(store.clone());

    intake.set_miles(USER, &day, 3.0).await.unwrap();
    intake.set_miles(USER, &day, 5.0).await.unwrap();

    assert_eq!(
        store.read_miles(USER, &day).await.unwrap(),
        Some(5.0),
        "overwrite, not 8.0"
    );
}

#[tokio::test]
async fn failed_write_surfaces_the_store_error() {
    let (memory, store) = memory_backed();
    let day = day();
    memory.fail_writes_under("user-caloric-log/");

    let err = IntakeService::new(store)
        .add_calories(USER, &day, 100)
        .await
        .unwrap_err();
    assert_eq!(
        err.path().unwrap(),
        format!(
            "user-caloric-log/{USER}/{}/{}",
            day.year_week_key(),
            day.date_key()
        )
    );
}
