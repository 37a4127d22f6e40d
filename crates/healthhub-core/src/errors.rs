// ABOUTME: Typed errors for store access, summary assembly, and input validation
// ABOUTME: Store failures carry the failing path so every target reports separately
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Error Handling
//!
//! The pipeline's error taxonomy:
//!
//! - [`StoreError`]: a single read or write against the document store did
//!   not complete. Non-fatal: recovered where it occurs, logged with the
//!   failing path, and never aborts sibling operations.
//! - [`SummaryError`]: the home-view assembly could not deliver a complete
//!   summary; names which of the four reads failed.
//! - [`ProfileValidationError`] / [`OnboardingError`]: rejected profile
//!   input during onboarding.
//!
//! An incomplete profile is deliberately *not* an error: computations that
//! depend on an absent field skip themselves and leave the previously
//! computed value in place.

use std::fmt;
use thiserror::Error;

/// Boxed source error for store failure chaining.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A store read or write that did not complete.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read did not complete; no derived state was updated.
    #[error("read of `{path}` failed")]
    ReadFailed {
        /// Store path of the failed read
        path: String,
        /// Underlying transport or backend error
        #[source]
        source: BoxError,
    },

    /// A write did not apply; reported distinctly per write target.
    #[error("write to `{path}` failed")]
    WriteFailed {
        /// Store path of the failed write
        path: String,
        /// Underlying transport or backend error
        #[source]
        source: BoxError,
    },

    /// The node at `path` exists but does not decode into the expected shape.
    #[error("malformed document at `{path}`")]
    Malformed {
        /// Store path of the undecodable node
        path: String,
        /// Decode failure
        #[source]
        source: serde_json::Error,
    },

    /// The configured store URL matches no supported backend.
    #[error("unsupported store url `{url}`")]
    UnsupportedUrl {
        /// The offending connection string
        url: String,
    },
}

impl StoreError {
    /// Build a [`StoreError::ReadFailed`] for `path`.
    pub fn read(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Build a [`StoreError::WriteFailed`] for `path`.
    pub fn write(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The store path this error is about, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::ReadFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::Malformed { path, .. } => Some(path),
            Self::UnsupportedUrl { .. } => None,
        }
    }
}

/// Which of the four summary reads failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    /// `user-physical-profile/{userId}`
    PhysicalProfile,
    /// `user-activity-profile/{userId}`
    ActivityProfile,
    /// `user-caloric-log/{userId}/{week}/{date}`
    CaloricLog,
    /// `user-mile-log/{userId}/{week}/{date}`
    MileLog,
}

impl fmt::Display for SummarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PhysicalProfile => "user-physical-profile",
            Self::ActivityProfile => "user-activity-profile",
            Self::CaloricLog => "user-caloric-log",
            Self::MileLog => "user-mile-log",
        };
        f.write_str(name)
    }
}

/// Summary assembly failure; the caller decides whether to retry or show
/// stale data.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// One of the four reads failed, so no (partial) summary is returned.
    #[error("summary fetch failed reading {kind}")]
    FetchFailed {
        /// Which read failed
        kind: SummarySource,
        /// The underlying store failure
        #[source]
        cause: StoreError,
    },
}

/// A rejected field in the onboarding profile form.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// Height feet component outside 3..=8
    #[error("height in feet must be between 3 and 8")]
    HeightFeetOutOfRange,
    /// Height inches component outside 0..=11
    #[error("height in inches must be between 0 and 11")]
    HeightInchesOutOfRange,
    /// Age outside 18..=99
    #[error("age must be between 18 and 99")]
    AgeOutOfRange,
    /// Current or goal weight outside 50.0..=300.0 lb
    #[error("weight must be between 50 and 300 pounds")]
    WeightOutOfRange,
}

/// Failure submitting an onboarding profile.
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// Input rejected before any write was issued
    #[error(transparent)]
    Invalid(#[from] ProfileValidationError),
    /// The profile write itself failed (log seeding is best-effort and does
    /// not surface here)
    #[error(transparent)]
    Store(#[from] StoreError),
}
