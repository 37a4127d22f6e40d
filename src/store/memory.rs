// ABOUTME: In-memory store backend over a concurrent path-to-node map
// ABOUTME: Local development and test backend with write counters and fault injection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! In-memory document store backend.
//!
//! Nodes live in a concurrent map keyed by full store path. Cloning the
//! store clones a handle to the same tree, so services and tests share one
//! view. Per-path write counters and injectable failure prefixes let tests
//! observe idempotence and per-target failure reporting without a network.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::{DashMap, DashSet};
use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{ActivityProfile, DatedSample, PhysicalProfile};
use serde_json::{json, Map, Value};

use super::{paths, StoreProvider};

#[derive(Default, Debug)]
struct Inner {
    nodes: DashMap<String, Value>,
    write_counts: DashMap<String, u64>,
    failing_reads: DashSet<String>,
    failing_writes: DashSet<String>,
}

/// In-memory backend; `memory://` connection strings resolve here.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read under `prefix` fail until [`clear_faults`](Self::clear_faults).
    pub fn fail_reads_under(&self, prefix: impl Into<String>) {
        self.inner.failing_reads.insert(prefix.into());
    }

    /// Make every write under `prefix` fail until [`clear_faults`](Self::clear_faults).
    pub fn fail_writes_under(&self, prefix: impl Into<String>) {
        self.inner.failing_writes.insert(prefix.into());
    }

    /// Remove all injected faults.
    pub fn clear_faults(&self) {
        self.inner.failing_reads.clear();
        self.inner.failing_writes.clear();
    }

    /// How many writes have been applied at exactly `path`.
    #[must_use]
    pub fn write_count(&self, path: &str) -> u64 {
        self.inner
            .write_counts
            .get(path)
            .map_or(0, |count| *count)
    }

    /// The raw node at `path`, if present.
    #[must_use]
    pub fn node(&self, path: &str) -> Option<Value> {
        self.inner.nodes.get(path).map(|node| node.clone())
    }

    /// Set the raw node at `path`, bypassing the typed operations. Used by
    /// tests and seeding to reproduce stored shapes the clients wrote.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when a write fault is injected
    /// under `path`.
    pub fn put_node(&self, path: &str, value: Value) -> Result<(), StoreError> {
        self.put(path, value)
    }

    fn injected(message: &str) -> io::Error {
        io::Error::other(message.to_owned())
    }

    fn get(&self, path: &str) -> Result<Option<Value>, StoreError> {
        if self
            .inner
            .failing_reads
            .iter()
            .any(|prefix| path.starts_with(prefix.key().as_str()))
        {
            return Err(StoreError::read(path, Self::injected("injected read fault")));
        }
        Ok(self.inner.nodes.get(path).map(|node| node.clone()))
    }

    fn put(&self, path: &str, value: Value) -> Result<(), StoreError> {
        if self
            .inner
            .failing_writes
            .iter()
            .any(|prefix| path.starts_with(prefix.key().as_str()))
        {
            return Err(StoreError::write(
                path,
                Self::injected("injected write fault"),
            ));
        }
        self.inner.nodes.insert(path.to_owned(), value);
        *self.inner.write_counts.entry(path.to_owned()).or_insert(0) += 1;
        Ok(())
    }

    /// Set one field of an object node, creating the node if absent. Merges
    /// like a PATCH: sibling fields are untouched.
    fn patch_field(&self, path: &str, field: &str, value: Value) -> Result<(), StoreError> {
        if self
            .inner
            .failing_writes
            .iter()
            .any(|prefix| path.starts_with(prefix.key().as_str()))
        {
            return Err(StoreError::write(
                path,
                Self::injected("injected write fault"),
            ));
        }
        let mut node = self
            .inner
            .nodes
            .entry(path.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = node.value_mut() {
            map.insert(field.to_owned(), value);
        }
        drop(node);
        *self.inner.write_counts.entry(path.to_owned()).or_insert(0) += 1;
        Ok(())
    }

    fn read_log_field(
        &self,
        path: &str,
        field: &str,
    ) -> Result<Option<f64>, StoreError> {
        Ok(self
            .get(path)?
            .as_ref()
            .and_then(|node| node.get(field))
            .and_then(Value::as_f64))
    }

    /// Flatten `root_prefix/{week}/{date}` nodes into date-sorted samples.
    fn history(&self, root_prefix: &str, field: &str) -> Result<Vec<DatedSample>, StoreError> {
        if self
            .inner
            .failing_reads
            .iter()
            .any(|prefix| root_prefix.starts_with(prefix.key().as_str()))
        {
            return Err(StoreError::read(
                root_prefix,
                Self::injected("injected read fault"),
            ));
        }

        let scan_prefix = format!("{root_prefix}/");
        let mut samples = Vec::new();
        for entry in &self.inner.nodes {
            let Some(rest) = entry.key().strip_prefix(&scan_prefix) else {
                continue;
            };
            // rest is `{yearWeek}/{date}`
            let Some((_, date_key)) = rest.split_once('/') else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d") else {
                continue;
            };
            let Some(value) = entry.value().get(field).and_then(Value::as_f64) else {
                continue;
            };
            samples.push(DatedSample { date, value });
        }
        samples.sort_by_key(|sample| sample.date);
        Ok(samples)
    }

    fn decode<T: serde::de::DeserializeOwned + Default>(
        path: &str,
        node: Option<Value>,
    ) -> Result<T, StoreError> {
        match node {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Malformed {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

#[async_trait]
impl StoreProvider for MemoryStore {
    async fn load_physical_profile(&self, user_id: &str) -> Result<PhysicalProfile, StoreError> {
        let path = paths::physical_profile(user_id);
        Self::decode(&path, self.get(&path)?)
    }

    async fn save_physical_profile(
        &self,
        user_id: &str,
        profile: &PhysicalProfile,
    ) -> Result<(), StoreError> {
        let path = paths::physical_profile(user_id);
        let node = serde_json::to_value(profile).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;
        self.put(&path, node)
    }

    async fn load_activity_profile(&self, user_id: &str) -> Result<ActivityProfile, StoreError> {
        let path = paths::activity_profile(user_id);
        Self::decode(&path, self.get(&path)?)
    }

    async fn save_activity_profile(
        &self,
        user_id: &str,
        profile: &ActivityProfile,
    ) -> Result<(), StoreError> {
        let path = paths::activity_profile(user_id);
        let node = serde_json::to_value(profile).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;
        self.put(&path, node)
    }

    async fn update_current_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        let path = paths::physical_profile(user_id);
        self.patch_field(&path, "currentWeight", json!(weight))
    }

    async fn update_goal_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        let path = paths::physical_profile(user_id);
        self.patch_field(&path, "goalWeight", json!(weight))
    }

    async fn read_calories(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::caloric_log(user_id, day), "calories")
    }

    async fn write_calories(
        &self,
        user_id: &str,
        day: &DayKeys,
        calories: f64,
    ) -> Result<(), StoreError> {
        self.put(
            &paths::caloric_log(user_id, day),
            json!({ "calories": calories }),
        )
    }

    async fn read_miles(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::mile_log(user_id, day), "miles")
    }

    async fn write_miles(
        &self,
        user_id: &str,
        day: &DayKeys,
        miles: f64,
    ) -> Result<(), StoreError> {
        self.put(&paths::mile_log(user_id, day), json!({ "miles": miles }))
    }

    async fn read_weight(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::weight_log(user_id, day), "weight")
    }

    async fn write_weight(
        &self,
        user_id: &str,
        day: &DayKeys,
        weight: f64,
    ) -> Result<(), StoreError> {
        self.put(&paths::weight_log(user_id, day), json!({ "weight": weight }))
    }

    async fn weight_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        self.history(&paths::weight_log_root(user_id), "weight")
    }

    async fn mile_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        self.history(&paths::mile_log_root(user_id), "miles")
    }
}
