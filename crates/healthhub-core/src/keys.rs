// ABOUTME: Date and year-week keys addressing per-day log entries
// ABOUTME: Formats YYYY-MM-DD dates and YYYY-Www ISO week keys for store paths
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Log keys for the per-day, per-week store layout.
//!
//! Daily log entries live under `user-*-log/{userId}/{yearWeek}/{date}`.
//! The date key is `YYYY-MM-DD`; the week key is `YYYY-Www` using ISO week
//! numbering (so late-December days can carry the following ISO year, and
//! early-January days the preceding one). The keys group log entries; the
//! calendar date is kept alongside them for history comparisons.

use chrono::{Datelike, Local, NaiveDate};

/// The pair of keys addressing one calendar day in the log trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayKeys {
    date: NaiveDate,
    date_key: String,
    year_week_key: String,
}

impl DayKeys {
    /// Build the keys for an arbitrary calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            date,
            date_key: date.format("%Y-%m-%d").to_string(),
            year_week_key: format!("{:04}-W{:02}", iso.year(), iso.week()),
        }
    }

    /// Build the keys for the current local date.
    #[must_use]
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// The calendar date these keys address.
    #[must_use]
    pub const fn calendar_date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD` path segment.
    #[must_use]
    pub fn date_key(&self) -> &str {
        &self.date_key
    }

    /// `YYYY-Www` path segment, ISO week numbering.
    #[must_use]
    pub fn year_week_key(&self) -> &str {
        &self.year_week_key
    }
}
