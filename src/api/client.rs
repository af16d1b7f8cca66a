// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API client and the shared request routine

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::response::{ApiResponse, ResponseFormat};
use super::session::{Credentials, Session};
use super::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};

/// API client configuration
///
/// Immutable after the client is built, except the proxy which can be
/// replaced through [`ApiClient::set_proxy`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Absolute URL of the target community, e.g. `https://demo.example.com`
    pub community: String,
    /// User agent string identifying the bot
    pub user_agent: String,
    /// Response format requested via the URL suffix
    pub format: ResponseFormat,
    /// Outbound HTTP proxy URL
    pub proxy: Option<String>,
}

impl ApiClientConfig {
    /// Create a new config for the given community location
    pub fn new(community: impl Into<String>) -> Self {
        Self {
            community: community.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: ResponseFormat::default(),
            proxy: None,
        }
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the response format
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the outbound proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// Synchronous client for one community.
///
/// Holds the Basic credentials and the cookie session created at
/// construction; every request carries both, and server-set cookies
/// accumulate in the session for the lifetime of the client. Each
/// operation performs exactly one blocking HTTP round trip and reports
/// its outcome as an [`ApiResponse`], never as an error.
pub struct ApiClient {
    http: Client,
    base: Url,
    config: ApiClientConfig,
    session: Session,
}

impl ApiClient {
    /// Create a new client for the community in `config`, authenticating
    /// with `credentials`
    pub fn new(config: ApiClientConfig, credentials: Credentials) -> Result<Self> {
        let base = Url::parse(&config.community)?;
        let session = Session::new(credentials);
        let http = Self::build_transport(&config, &session)?;

        Ok(Self {
            http,
            base,
            config,
            session,
        })
    }

    fn build_transport(config: &ApiClientConfig, session: &Session) -> Result<Client> {
        let mut default_headers = HeaderMap::new();
        // The community serves live data; suppress intermediary caching.
        default_headers.insert("cache-control", HeaderValue::from_static("no-cache"));
        default_headers.insert("pragma", HeaderValue::from_static("no-cache"));

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(default_headers)
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            // No keep-alive: every request opens a fresh connection
            .pool_max_idle_per_host(0)
            .cookie_provider(session.cookie_store());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("invalid proxy URL: {}", e)))?,
            );
        }

        Ok(builder.build()?)
    }

    /// Replace the outbound proxy on a live client.
    ///
    /// Rebuilds the transport; the cookie session and credentials carry
    /// over, so accumulated cookies keep flowing to the community.
    pub fn set_proxy(&mut self, proxy: Option<String>) -> Result<()> {
        self.config.proxy = proxy;
        self.http = Self::build_transport(&self.config, &self.session)?;
        Ok(())
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the session attached to this client
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Issue a GET request against a community resource
    pub(crate) fn get<Q>(&self, resource: &str, query: Option<&Q>) -> ApiResponse
    where
        Q: Serialize + ?Sized,
    {
        self.dispatch(resource, Method::GET, query, None::<&()>)
    }

    /// Issue a POST request with a form-encoded body
    pub(crate) fn post_form<F>(&self, resource: &str, form: &F) -> ApiResponse
    where
        F: Serialize + ?Sized,
    {
        self.dispatch(resource, Method::POST, None::<&()>, Some(form))
    }

    /// Shared request routine: one HTTP round trip, outcome normalized
    /// into an `ApiResponse`
    fn dispatch<Q, F>(
        &self,
        resource: &str,
        method: Method,
        query: Option<&Q>,
        form: Option<&F>,
    ) -> ApiResponse
    where
        Q: Serialize + ?Sized,
        F: Serialize + ?Sized,
    {
        match self.exchange(resource, method, query, form) {
            Ok(body) => ApiResponse::success(self.config.format, body),
            Err(err) => {
                warn!(resource, error = %err, "exchange failed");
                ApiResponse::failure(err.to_string())
            }
        }
    }

    fn exchange<Q, F>(
        &self,
        resource: &str,
        method: Method,
        query: Option<&Q>,
        form: Option<&F>,
    ) -> Result<String>
    where
        Q: Serialize + ?Sized,
        F: Serialize + ?Sized,
    {
        let url = self.endpoint(resource)?;
        debug!(method = %method, url = %url, "issuing request");

        let mut request = self.http.request(method, url).basic_auth(
            self.session.credentials().username(),
            Some(self.session.credentials().secret()),
        );

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(form) = form {
            request = request.form(form);
        }

        let response = request.send()?.error_for_status()?;
        Ok(response.text()?)
    }

    /// Build the final URL: community location + resource + format suffix
    fn endpoint(&self, resource: &str) -> Result<Url> {
        let path = format!("{}.{}", resource, self.config.format.suffix());
        Ok(self.base.join(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn client() -> ApiClient {
        ApiClient::new(
            ApiClientConfig::new("https://demo.example.com"),
            Credentials::new("emily@demo.test", "hunter2"),
        )
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = ApiClientConfig::new("https://demo.example.com");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.format, ResponseFormat::Json);
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_endpoint_appends_format_suffix() {
        let url = client().endpoint("/api/users").unwrap();
        assert_eq!(url.as_str(), "https://demo.example.com/api/users.json");
    }

    #[test]
    fn test_endpoint_respects_configured_format() {
        let client = ApiClient::new(
            ApiClientConfig::new("https://demo.example.com").format(ResponseFormat::Xml),
            Credentials::new("emily@demo.test", "hunter2"),
        )
        .unwrap();
        let url = client.endpoint("/api/authentication").unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.example.com/api/authentication.xml"
        );
    }

    #[test]
    fn test_invalid_community_url() {
        let result = ApiClient::new(
            ApiClientConfig::new("not a url"),
            Credentials::new("emily@demo.test", "hunter2"),
        );
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn test_invalid_proxy_url() {
        let result = ApiClient::new(
            ApiClientConfig::new("https://demo.example.com").proxy("::not-a-proxy::"),
            Credentials::new("emily@demo.test", "hunter2"),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_set_proxy_keeps_cookie_store() {
        let mut client = client();
        let before = client.session().cookie_store();
        client.set_proxy(None).unwrap();
        let after = client.session().cookie_store();
        assert!(Arc::ptr_eq(&before, &after));
    }
}
