// ABOUTME: Firebase Realtime Database REST backend for the document store
// ABOUTME: Path-addressed GET/PUT/PATCH of JSON nodes with optional auth token
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Firebase-style REST backend.
//!
//! The hosted store exposes every node at `{base}/{path}.json`: `GET`
//! returns the node (JSON `null` when absent), `PUT` replaces it, `PATCH`
//! merges children. An optional `auth` query token is appended when
//! configured. Requests share one pooled client with timeouts from
//! [`StoreConfig`](crate::config::StoreConfig).

use async_trait::async_trait;
use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{ActivityProfile, DatedSample, PhysicalProfile};
use reqwest::Client;
use serde_json::{json, Value};

use super::{flatten_week_tree, paths, StoreProvider};
use crate::config::StoreConfig;
use crate::utils::http_client::create_client_with_timeout;

/// REST backend for `http(s)://` store URLs.
#[derive(Clone, Debug)]
pub struct FirebaseStore {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
}

impl FirebaseStore {
    /// Build a backend from the store configuration.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_owned(),
            auth_token: config.auth_token.clone(),
            client: create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs),
        }
    }

    fn node_url(&self, path: &str) -> String {
        match &self.auth_token {
            Some(token) => format!("{}/{path}.json?auth={token}", self.base_url),
            None => format!("{}/{path}.json", self.base_url),
        }
    }

    /// `GET {base}/{path}.json`; a JSON `null` body is an absent node.
    async fn get_node(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let response = self
            .client
            .get(self.node_url(path))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| StoreError::read(path, source))?;
        let node: Value = response
            .json()
            .await
            .map_err(|source| StoreError::read(path, source))?;
        Ok(match node {
            Value::Null => None,
            value => Some(value),
        })
    }

    /// `PUT {base}/{path}.json`: replace the node.
    async fn put_node(&self, path: &str, node: &Value) -> Result<(), StoreError> {
        self.client
            .put(self.node_url(path))
            .json(node)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| StoreError::write(path, source))?;
        Ok(())
    }

    /// `PATCH {base}/{path}.json`: merge children into the node.
    async fn patch_node(&self, path: &str, children: &Value) -> Result<(), StoreError> {
        self.client
            .patch(self.node_url(path))
            .json(children)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| StoreError::write(path, source))?;
        Ok(())
    }

    async fn read_log_field(&self, path: &str, field: &str) -> Result<Option<f64>, StoreError> {
        Ok(self
            .get_node(path)
            .await?
            .as_ref()
            .and_then(|node| node.get(field))
            .and_then(Value::as_f64))
    }

    fn decode<T: serde::de::DeserializeOwned + Default>(
        path: &str,
        node: Option<Value>,
    ) -> Result<T, StoreError> {
        match node {
            None => Ok(T::default()),
            Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Malformed {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

#[async_trait]
impl StoreProvider for FirebaseStore {
    async fn load_physical_profile(&self, user_id: &str) -> Result<PhysicalProfile, StoreError> {
        let path = paths::physical_profile(user_id);
        Self::decode(&path, self.get_node(&path).await?)
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
        self.put_node(&path, &node).await
    }

    async fn load_activity_profile(&self, user_id: &str) -> Result<ActivityProfile, StoreError> {
        let path = paths::activity_profile(user_id);
        Self::decode(&path, self.get_node(&path).await?)
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
        self.put_node(&path, &node).await
    }

    async fn update_current_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        let path = paths::physical_profile(user_id);
        self.patch_node(&path, &json!({ "currentWeight": weight }))
            .await
    }

    async fn update_goal_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        let path = paths::physical_profile(user_id);
        self.patch_node(&path, &json!({ "goalWeight": weight }))
            .await
    }

    async fn read_calories(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::caloric_log(user_id, day), "calories")
            .await
    }

    async fn write_calories(
        &self,
        user_id: &str,
        day: &DayKeys,
        calories: f64,
    ) -> Result<(), StoreError> {
        self.put_node(
            &paths::caloric_log(user_id, day),
            &json!({ "calories": calories }),
        )
        .await
    }

    async fn read_miles(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::mile_log(user_id, day), "miles")
            .await
    }

    async fn write_miles(
        &self,
        user_id: &str,
        day: &DayKeys,
        miles: f64,
    ) -> Result<(), StoreError> {
        self.put_node(&paths::mile_log(user_id, day), &json!({ "miles": miles }))
            .await
    }

    async fn read_weight(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        self.read_log_field(&paths::weight_log(user_id, day), "weight")
            .await
    }

    async fn write_weight(
        &self,
        user_id: &str,
        day: &DayKeys,
        weight: f64,
    ) -> Result<(), StoreError> {
        self.put_node(
            &paths::weight_log(user_id, day),
            &json!({ "weight": weight }),
        )
        .await
    }

    async fn weight_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        let path = paths::weight_log_root(user_id);
        let tree = self.get_node(&path).await?.unwrap_or(Value::Null);
        Ok(flatten_week_tree(&tree, "weight"))
    }

    async fn mile_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        let path = paths::mile_log_root(user_id);
        let tree = self.get_node(&path).await?.unwrap_or(Value::Null);
        Ok(flatten_week_tree(&tree, "miles"))
    }
}
