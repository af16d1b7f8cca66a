// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Authentication endpoint

use super::client::ApiClient;
use super::resources;
use super::response::ApiResponse;

impl ApiClient {
    /// Determine whether the given login is valid for the community.
    ///
    /// Checks the supplied email/password pair against the community's
    /// authentication resource. The credentials attached to this client
    /// are not changed.
    pub fn authenticate(&self, email: &str, password: &str) -> ApiResponse {
        self.post_form(
            resources::AUTHENTICATION,
            &[("email", email), ("password", password)],
        )
    }
}
