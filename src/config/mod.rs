// ABOUTME: Configuration modules for the HealthHub pipeline
// ABOUTME: Environment-variable driven settings for the store and logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management.

pub mod environment;

pub use environment::{AppConfig, StoreConfig};
