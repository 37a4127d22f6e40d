// ABOUTME: Domain service layer for the health-tracking update flows
// ABOUTME: Protocol-agnostic operations reusable from any UI entry point
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Domain service layer.
//!
//! Update flows extracted from the screens that trigger them, so the same
//! business rules apply regardless of the entry point.

/// Calorie and mile intake updates
pub mod intake;

/// Profile onboarding: validation, profile writes, log seeding
pub mod onboarding;

/// Weight and mile history for the summary report
pub mod reports;

/// Weight updates and goal-reached detection
pub mod weight;
