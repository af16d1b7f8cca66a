// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! User endpoints

use serde::Serialize;

use super::client::ApiClient;
use super::resources;
use super::response::ApiResponse;

/// Query parameters for listing community users.
///
/// Field order is the order the parameters appear in the query string.
#[derive(Debug, Clone, Serialize)]
pub struct UserListQuery {
    /// Membership state filter, one of `inactive`, `terminated`, `all`,
    /// `active`. Defaults to `active`.
    pub state: String,
    /// Page number to view. Defaults to 1.
    pub page: u32,
    /// Number of users returned per page. Defaults to 20.
    pub per_page: u32,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            state: "active".to_string(),
            page: 1,
            per_page: 20,
        }
    }
}

impl UserListQuery {
    /// Create a query with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the membership state filter
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Set the page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

impl ApiClient {
    /// Get a list of users for the community
    pub fn list_users(&self, query: &UserListQuery) -> ApiResponse {
        self.get(resources::USERS, Some(query))
    }

    /// Show information for a single user
    pub fn get_user(&self, user_id: &str) -> ApiResponse {
        self.get::<()>(&format!("{}/{}", resources::USERS, user_id), None)
    }
}
