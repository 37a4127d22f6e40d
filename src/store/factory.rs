// ABOUTME: Store factory and backend abstraction with runtime selection
// ABOUTME: Resolves memory:// and http(s):// connection strings to a backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Store factory with connection-string backend detection.

use async_trait::async_trait;
use healthhub_core::errors::StoreError;
use healthhub_core::keys::DayKeys;
use healthhub_core::models::{ActivityProfile, DatedSample, PhysicalProfile};
use tracing::info;

use super::firebase::FirebaseStore;
use super::memory::MemoryStore;
use super::StoreProvider;
use crate::config::StoreConfig;

/// Supported store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-process map, no persistence
    Memory,
    /// Hosted REST document store
    Firebase,
}

/// Store instance wrapper that delegates to the selected backend.
#[derive(Clone, Debug)]
pub enum Store {
    /// In-memory backend (local development and tests)
    Memory(MemoryStore),
    /// Firebase-style REST backend (hosted deployments)
    Firebase(FirebaseStore),
}

impl Store {
    /// Create a store from the configured connection string.
    ///
    /// `memory://` resolves to the in-memory backend; `http://` and
    /// `https://` resolve to the REST backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnsupportedUrl`] for any other scheme.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = if config.url.starts_with("memory://") || config.url == "memory" {
            Self::Memory(MemoryStore::new())
        } else if config.url.starts_with("https://") || config.url.starts_with("http://") {
            Self::Firebase(FirebaseStore::new(config))
        } else {
            return Err(StoreError::UnsupportedUrl {
                url: config.url.clone(),
            });
        };
        info!("Store backend selected: {}", store.backend_info());
        Ok(store)
    }

    /// The backend type enum.
    #[must_use]
    pub const fn store_type(&self) -> StoreType {
        match self {
            Self::Memory(_) => StoreType::Memory,
            Self::Firebase(_) => StoreType::Firebase,
        }
    }

    /// A descriptive string for the current backend.
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "Memory (local development)",
            Self::Firebase(_) => "Firebase REST (hosted)",
        }
    }
}

impl From<MemoryStore> for Store {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl From<FirebaseStore> for Store {
    fn from(store: FirebaseStore) -> Self {
        Self::Firebase(store)
    }
}

#[async_trait]
impl StoreProvider for Store {
    async fn load_physical_profile(&self, user_id: &str) -> Result<PhysicalProfile, StoreError> {
        match self {
            Self::Memory(store) => store.load_physical_profile(user_id).await,
            Self::Firebase(store) => store.load_physical_profile(user_id).await,
        }
    }

    async fn save_physical_profile(
        &self,
        user_id: &str,
        profile: &PhysicalProfile,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.save_physical_profile(user_id, profile).await,
            Self::Firebase(store) => store.save_physical_profile(user_id, profile).await,
        }
    }

    async fn load_activity_profile(&self, user_id: &str) -> Result<ActivityProfile, StoreError> {
        match self {
            Self::Memory(store) => store.load_activity_profile(user_id).await,
            Self::Firebase(store) => store.load_activity_profile(user_id).await,
        }
    }

    async fn save_activity_profile(
        &self,
        user_id: &str,
        profile: &ActivityProfile,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.save_activity_profile(user_id, profile).await,
            Self::Firebase(store) => store.save_activity_profile(user_id, profile).await,
        }
    }

    async fn update_current_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.update_current_weight(user_id, weight).await,
            Self::Firebase(store) => store.update_current_weight(user_id, weight).await,
        }
    }

    async fn update_goal_weight(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.update_goal_weight(user_id, weight).await,
            Self::Firebase(store) => store.update_goal_weight(user_id, weight).await,
        }
    }

    async fn read_calories(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        match self {
            Self::Memory(store) => store.read_calories(user_id, day).await,
            Self::Firebase(store) => store.read_calories(user_id, day).await,
        }
    }

    async fn write_calories(
        &self,
        user_id: &str,
        day: &DayKeys,
        calories: f64,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.write_calories(user_id, day, calories).await,
            Self::Firebase(store) => store.write_calories(user_id, day, calories).await,
        }
    }

    async fn read_miles(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        match self {
            Self::Memory(store) => store.read_miles(user_id, day).await,
            Self::Firebase(store) => store.read_miles(user_id, day).await,
        }
    }

    async fn write_miles(
        &self,
        user_id: &str,
        day: &DayKeys,
        miles: f64,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.write_miles(user_id, day, miles).await,
            Self::Firebase(store) => store.write_miles(user_id, day, miles).await,
        }
    }

    async fn read_weight(&self, user_id: &str, day: &DayKeys) -> Result<Option<f64>, StoreError> {
        match self {
            Self::Memory(store) => store.read_weight(user_id, day).await,
            Self::Firebase(store) => store.read_weight(user_id, day).await,
        }
    }

    async fn write_weight(
        &self,
        user_id: &str,
        day: &DayKeys,
        weight: f64,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.write_weight(user_id, day, weight).await,
            Self::Firebase(store) => store.write_weight(user_id, day, weight).await,
        }
    }

    async fn weight_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        match self {
            Self::Memory(store) => store.weight_history(user_id).await,
            Self::Firebase(store) => store.weight_history(user_id).await,
        }
    }

    async fn mile_history(&self, user_id: &str) -> Result<Vec<DatedSample>, StoreError> {
        match self {
            Self::Memory(store) => store.mile_history(user_id).await,
            Self::Firebase(store) => store.mile_history(user_id).await,
        }
    }
}
