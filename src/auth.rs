// ABOUTME: Narrow interface to the external authentication collaborator
// ABOUTME: Exposes the signed-in user id and sign-out; provider internals stay external
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication collaborator seam.
//!
//! The hosted auth provider owns accounts, credentials, and tokens. The
//! pipeline only ever needs two things from it: the current user's opaque
//! id (the key every store path starts with) and a way to end the session.

use std::sync::RwLock;

/// The authentication collaborator as the pipeline sees it.
pub trait SessionProvider: Send + Sync {
    /// The signed-in user's opaque id, if any.
    fn current_user_id(&self) -> Option<String>;

    /// End the session; subsequent [`current_user_id`](Self::current_user_id)
    /// calls return `None`.
    fn sign_out(&self);
}

/// Fixed-identity session for tests, seeding, and local development.
#[derive(Debug, Default)]
pub struct StaticSession {
    user_id: RwLock<Option<String>>,
}

impl StaticSession {
    /// Create a session signed in as `user_id`.
    #[must_use]
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: RwLock::new(Some(user_id.into())),
        }
    }
}

impl SessionProvider for StaticSession {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.read().ok().and_then(|guard| guard.clone())
    }

    fn sign_out(&self) {
        if let Ok(mut guard) = self.user_id.write() {
            *guard = None;
        }
    }
}
