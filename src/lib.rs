// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Castbot - Community API Bot Client
//!
//! A minimal synchronous client for a social-collaboration community's
//! REST API: authenticate a login, list users, fetch a single user.
//! Raw response bodies only - castbot never parses what the community
//! returns.
//!
//! ## Features
//!
//! - Synchronous: one blocking HTTP round trip per operation
//! - Session affinity: per-client cookie store shared across requests
//! - Basic authentication with secret-redacting debug output
//! - Response format selection via URL suffix (JSON or XML)
//! - Optional outbound HTTP proxy, replaceable on a live client
//! - Infallible operations: every failure becomes a failed response,
//!   nothing to catch
//!
//! ## Example
//!
//! ```rust,no_run
//! use castbot::{ApiClient, ApiClientConfig, Credentials, UserListQuery};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiClientConfig::new("https://demo.example.com")
//!         .user_agent("my-bot/1.0");
//!     let client = ApiClient::new(config, Credentials::new("emily@demo.test", "hunter2"))?;
//!
//!     let login = client.authenticate("emily@demo.test", "hunter2");
//!     if !login.is_success() {
//!         eprintln!("{}", login);
//!         return Ok(());
//!     }
//!
//!     println!("{}", client.list_users(&UserListQuery::default()));
//!     println!("{}", client.get_user("1"));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;

// Re-exports for convenience

// Client and configuration
pub use api::{ApiClient, ApiClientConfig};

// Session state
pub use api::{Credentials, Session};

// Responses
pub use api::{ApiResponse, ResponseFormat};

// Operation parameters
pub use api::UserListQuery;

pub use api::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT};

// Errors
pub use error::{Error, Result};

/// Castbot version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
