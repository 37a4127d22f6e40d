// ABOUTME: Integration tests for idempotent daily log initialization
// ABOUTME: Verifies zero-default creation, no-op reruns, and best-effort failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use healthhub::daily_logs::DailyLogInitializer;
use healthhub::keys::DayKeys;
use healthhub::store::{paths, MemoryStore, Store, StoreProvider};

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
async fn creates_both_logs_with_zero_defaults() {
    let (_, store) = memory_backed();
    let init = DailyLogInitializer::new(store.clone());
    let day = day();

    init.ensure_today_initialized(USER, &day).await;

    assert_eq!(store.read_calories(USER, &day).await.unwrap(), Some(0.0));
    assert_eq!(store.read_miles(USER, &day).await.unwrap(), Some(0.0));
}

#[tokio::test]
async fn second_call_is_a_no_op() {
    let (memory, store) = memory_backed();
    let init = DailyLogInitializer::new(store);
    let day = day();

    init.ensure_today_initialized(USER, &day).await;
    init.ensure_today_initialized(USER, &day).await;

    assert_eq!(
        memory.write_count(&paths::caloric_log(USER, &day)),
        1,
        "exactly one creation write for the caloric log"
    );
    assert_eq!(memory.write_count(&paths::mile_log(USER, &day)), 1);
}

#[tokio::test]
async fn never_overwrites_a_nonzero_log() {
    let (_, store) = memory_backed();
    let init = DailyLogInitializer::new(store.clone());
    let day = day();

    store.write_calories(USER, &day, 450.0).await.unwrap();
    store.write_miles(USER, &day, 3.5).await.unwrap();

    init.ensure_today_initialized(USER, &day).await;

    assert_eq!(store.read_calories(USER, &day).await.unwrap(), Some(450.0));
    assert_eq!(store.read_miles(USER, &day).await.unwrap(), Some(3.5));
}

#[tokio::test]
async fn store_failures_do_not_fail_the_caller() {
    let (memory, store) = memory_backed();
    let init = DailyLogInitializer::new(store.clone());
    let day = day();

    memory.fail_reads_under("user-caloric-log/");
    memory.fail_writes_under("user-mile-log/");

    // Returns normally despite one read fault and one write fault
    init.ensure_today_initialized(USER, &day).await;

    memory.clear_faults();
    assert_eq!(
        store.read_calories(USER, &day).await.unwrap(),
        None,
        "failed read path skipped initialization"
    );
    assert_eq!(
        store.read_miles(USER, &day).await.unwrap(),
        None,
        "failed write left the mile log absent"
    );
}

#[tokio::test]
async fn caloric_failure_does_not_block_mile_initialization() {
    let (memory, store) = memory_backed();
    let init = DailyLogInitializer::new(store.clone());
    let day = day();

    memory.fail_reads_under("user-caloric-log/");
    init.ensure_today_initialized(USER, &day).await;
    memory.clear_faults();

    assert_eq!(
        store.read_miles(USER, &day).await.unwrap(),
        Some(0.0),
        "mile log initialized even though the caloric read failed"
    );
}
