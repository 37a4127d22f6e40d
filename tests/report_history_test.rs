// ABOUTME: Integration tests for summary report history retrieval
// ABOUTME: Verifies week-tree flattening, date ordering, and latest-weight lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use healthhub::keys::DayKeys;
use healthhub::services::reports::ReportService;
use healthhub::store::{MemoryStore, Store, StoreProvider};

const USER: &str = "user-1";

fn keys(year: i32, month: u32, date: u32) -> DayKeys {
    DayKeys::for_date(NaiveDate::from_ymd_opt(year, month, date).unwrap())
}

fn memory_backed() -> (MemoryStore, Store) {
    let memory = MemoryStore::new();
    let store = Store::from(memory.clone());
    (memory, store)
}

#[tokio::test]
async fn weight_history_spans_weeks_in_date_order() {
    let (_, store) = memory_backed();
    // Deliberately written out of order, across two ISO weeks
    store.write_weight(USER, &keys(2024, 5, 15), 178.0).await.unwrap();
    store.write_weight(USER, &keys(2024, 5, 6), 180.0).await.unwrap();
    store.write_weight(USER, &keys(2024, 5, 9), 179.2).await.unwrap();

    let history = ReportService::new(store).weight_history(USER).await.unwrap();

    let dates: Vec<String> = history.iter().map(|s| s.date.to_string()).collect();
    assert_eq!(dates, ["2024-05-06", "2024-05-09", "2024-05-15"]);
    assert!((history[0].value - 180.0).abs() < f64::EPSILON);
    assert!((history[2].value - 178.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn mile_history_flattens_the_same_way() {
    let (_, store) = memory_backed();
    store.write_miles(USER, &keys(2024, 5, 6), 2.0).await.unwrap();
    store.write_miles(USER, &keys(2024, 5, 15), 4.5).await.unwrap();

    let history = ReportService::new(store).mile_history(USER).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!((history[1].value - 4.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn histories_are_per_user() {
    let (_, store) = memory_backed();
    store.write_weight(USER, &keys(2024, 5, 6), 180.0).await.unwrap();
    store.write_weight("user-2", &keys(2024, 5, 7), 140.0).await.unwrap();

    let history = ReportService::new(store).weight_history(USER).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!((history[0].value - 180.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_history_is_an_empty_list() {
    let (_, store) = memory_backed();
    let history = ReportService::new(store).weight_history(USER).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn failed_tree_read_surfaces_the_error() {
    let (memory, store) = memory_backed();
    memory.fail_reads_under("user-weight-log/");
    assert!(ReportService::new(store).weight_history(USER).await.is_err());
}

#[tokio::test]
async fn latest_weight_prefers_todays_sample() {
    let (_, store) = memory_backed();
    let today = keys(2024, 5, 15);
    store.write_weight(USER, &keys(2024, 5, 10), 182.0).await.unwrap();
    store.write_weight(USER, &today, 179.0).await.unwrap();

    assert_eq!(store.latest_weight(USER, &today).await.unwrap(), Some(179.0));
}

#[tokio::test]
async fn latest_weight_falls_back_to_most_recent_prior_sample() {
    let (_, store) = memory_backed();
    let today = keys(2024, 5, 15);
    store.write_weight(USER, &keys(2024, 5, 2), 184.0).await.unwrap();
    store.write_weight(USER, &keys(2024, 5, 10), 182.0).await.unwrap();
    // A future-dated sample must not win
    store.write_weight(USER, &keys(2024, 5, 20), 170.0).await.unwrap();

    assert_eq!(store.latest_weight(USER, &today).await.unwrap(), Some(182.0));
}

#[tokio::test]
async fn latest_weight_is_none_without_samples() {
    let (_, store) = memory_backed();
    assert_eq!(store.latest_weight(USER, &keys(2024, 5, 15)).await.unwrap(), None);
}
