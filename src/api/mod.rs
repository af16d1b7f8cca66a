// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API layer for the castbot client
//!
//! Provides a synchronous HTTP client with Basic authentication, a
//! per-client cookie session, and the community endpoints built on top
//! of a single shared request routine.

mod auth;
mod client;
mod response;
mod session;
mod users;

pub use client::{ApiClient, ApiClientConfig};
pub use response::{ApiResponse, ResponseFormat};
pub use session::{Credentials, Session};
pub use users::UserListQuery;

use std::time::Duration;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("castbot/", env!("CARGO_PKG_VERSION"));

/// Connect and whole-request timeout applied to every exchange
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Community resource paths
pub mod resources {
    pub const AUTHENTICATION: &str = "/api/authentication";
    pub const USERS: &str = "/api/users";
}
