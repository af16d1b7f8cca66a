// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-client session state: credentials and the shared cookie store

use std::fmt;
use std::sync::Arc;

use reqwest::cookie::Jar;

/// Username/secret pair sent via HTTP Basic authentication.
///
/// The secret is never exposed through `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Session state owned by one client instance.
///
/// Created once at client construction and attached to every request
/// that client issues. The cookie store accumulates server-set cookies
/// for the lifetime of the client; it lives behind an `Arc` so the
/// transport can be rebuilt (proxy replacement) without losing it.
pub struct Session {
    credentials: Credentials,
    cookies: Arc<Jar>,
}

impl Session {
    /// Create a new session with an empty cookie store
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            cookies: Arc::new(Jar::default()),
        }
    }

    /// Get the credentials attached to this session
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get a handle to the shared cookie store
    pub(crate) fn cookie_store(&self) -> Arc<Jar> {
        Arc::clone(&self.cookies)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("emily@demo.test", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("emily@demo.test"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_session_shares_one_cookie_store() {
        let session = Session::new(Credentials::new("emily@demo.test", "hunter2"));
        let a = session.cookie_store();
        let b = session.cookie_store();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
