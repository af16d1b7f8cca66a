// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API response wrapper

use std::fmt;

/// Serialization the community is asked to return, selected via a URL
/// suffix on every resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON responses (`.json` suffix)
    #[default]
    Json,
    /// XML responses (`.xml` suffix)
    Xml,
}

impl ResponseFormat {
    /// Lowercase name appended to resource paths, e.g. `json` in
    /// `/api/users.json`
    pub fn suffix(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Outcome of one API exchange.
///
/// `content` is the raw response body on success, or the transport
/// error message on failure. It is never parsed here; callers interpret
/// it according to `format`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Whether the exchange succeeded
    pub success: bool,
    /// Configured response format; `None` on failure
    pub format: Option<ResponseFormat>,
    /// Raw body text, or the failure diagnostic
    pub content: String,
}

impl ApiResponse {
    /// Build a successful response carrying the raw body
    pub fn success(format: ResponseFormat, content: impl Into<String>) -> Self {
        Self {
            success: true,
            format: Some(format),
            content: content.into(),
        }
    }

    /// Build a failed response carrying the error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            format: None,
            content: message.into(),
        }
    }

    /// Check if the exchange succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Consume the response, returning the raw content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success: {}", self.success)?;
        match self.format {
            Some(format) => writeln!(f, "format: {}", format)?,
            None => writeln!(f, "format: none")?,
        }
        writeln!(f, "content: {}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_suffix() {
        assert_eq!(ResponseFormat::Json.suffix(), "json");
        assert_eq!(ResponseFormat::Xml.suffix(), "xml");
        assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    }

    #[test]
    fn test_success_display() {
        let resp = ApiResponse::success(ResponseFormat::Json, r#"{"users":[]}"#);
        assert_eq!(
            resp.to_string(),
            "success: true\nformat: json\ncontent: {\"users\":[]}\n"
        );
    }

    #[test]
    fn test_failure_display() {
        let resp = ApiResponse::failure("HTTP error: connection refused");
        assert!(!resp.is_success());
        assert_eq!(resp.format, None);
        assert_eq!(
            resp.to_string(),
            "success: false\nformat: none\ncontent: HTTP error: connection refused\n"
        );
    }

    #[test]
    fn test_into_content() {
        let resp = ApiResponse::success(ResponseFormat::Xml, "<users/>");
        assert_eq!(resp.into_content(), "<users/>");
    }
}
