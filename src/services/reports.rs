// ABOUTME: Weight and mile history retrieval for the summary report
// ABOUTME: Flattens the weekly log trees into date-ordered sample lists
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Summary report data.
//!
//! The report screen charts weight over time and miles run over time. The
//! store keeps both as `{yearWeek}/{date}` trees; this service flattens
//! them into date-ordered samples, skipping entries whose date key or
//! value does not parse. Rendering belongs to the external chart
//! collaborator; whether a failed read degrades to an empty chart or an
//! error state is the caller's choice.

use healthhub_core::errors::StoreError;
use healthhub_core::models::DatedSample;

use crate::store::{Store, StoreProvider};

/// History retrieval for the summary report.
#[derive(Clone)]
pub struct ReportService {
    store: Store,
}

impl ReportService {
    /// Create the service over `store`.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// All weight samples, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the store error when the log tree cannot be read.
    pub async fn weight_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        self.store.weight_history(user_id).await
    }

    /// All mile entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the store error when the log tree cannot be read.
    pub async fn mile_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        self.store.mile_history(user_id).await
    }
}
