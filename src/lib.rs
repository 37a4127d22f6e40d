// ABOUTME: Main library entry point for the HealthHub tracking pipeline
// ABOUTME: Wires store backends, daily-log services, and the metrics engine
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # HealthHub
//!
//! The daily health-metric pipeline behind a health-tracking application:
//! users keep physical and activity profiles, log daily calories, miles,
//! and weight, and see an assembled home summary with a derived daily
//! calorie target.
//!
//! One refresh cycle runs:
//!
//! 1. [`DailyLogInitializer`](daily_logs::DailyLogInitializer): today's
//!    caloric and mile entries exist (zero-defaulted), idempotently
//! 2. [`SummaryAssembler`](summary::SummaryAssembler): concurrent fan-out
//!    of the four profile/log reads, joined into one [`Summary`](models::Summary)
//! 3. [`metrics`]: Mifflin-St Jeor BMR, activity multiplier, weekly-goal
//!    deficit, composed into the calorie target
//! 4. The resulting [`HomeView`](summary::HomeView) is handed to the UI
//!    collaborator
//!
//! Persistence is one logical path-addressed document store behind
//! [`store::StoreProvider`], with in-memory and hosted REST backends
//! selected at runtime from the configured connection string. All store
//! failures are non-fatal: logged with their path, reported per target,
//! and never allowed to crash the pipeline.

/// Authentication collaborator seam
pub mod auth;
/// Environment-driven configuration
pub mod config;
/// Daily log initialization
pub mod daily_logs;
/// Logging configuration and setup
pub mod logging;
/// Domain service layer (intake, onboarding, reports, weight)
pub mod services;
/// Document store abstraction and backends
pub mod store;
/// Summary assembly and home refresh orchestration
pub mod summary;
/// Shared utilities
pub mod utils;

pub use healthhub_core::{errors, keys, models};
pub use healthhub_intelligence::metrics;
