use thiserror::Error;

/// Errors raised while shaping or proxying a storefront request.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("request body is not valid JSON: {0}")]
    InvalidRequestBody(String),

    #[error("missing required configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("upstream request failed{}: {message}", .status.map(|s| format!(" with status {s}")).unwrap_or_default())]
    UpstreamFailure {
        status: Option<u16>,
        message: String,
    },

    #[error("response serialization failed: {0}")]
    Serialization(String),
}

impl ProxyError {
    /// Status code reported to the caller when this error surfaces directly.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequestBody(_) | Self::UnsupportedMethod(_) => 400,
            Self::MissingConfiguration(_) | Self::Serialization(_) => 500,
            Self::UpstreamFailure { status, .. } => status.unwrap_or(500),
        }
    }

    /// Stable machine-readable label for the `error` field of JSON error bodies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidRequestBody(_) => "invalid_request_body",
            Self::MissingConfiguration(_) => "missing_configuration",
            Self::UnsupportedMethod(_) => "unsupported_method",
            Self::UpstreamFailure { .. } => "upstream_failure",
            Self::Serialization(_) => "serialization_failure",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::UpstreamFailure {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Whether upstream failures on an endpoint are absorbed into a 200 response
/// with substitute data, or surfaced to the caller with an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorVisibility {
    Suppressed,
    Surfaced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ProxyError::InvalidRequestBody("x".into()).status_code(), 400);
        assert_eq!(ProxyError::UnsupportedMethod("PATCH".into()).status_code(), 400);
        assert_eq!(ProxyError::MissingConfiguration("SHIFT4SHOP_TOKEN").status_code(), 500);
        assert_eq!(
            ProxyError::UpstreamFailure { status: Some(404), message: "not found".into() }.status_code(),
            404
        );
        assert_eq!(
            ProxyError::UpstreamFailure { status: None, message: "timed out".into() }.status_code(),
            500
        );
    }

    #[test]
    fn upstream_failure_message_includes_status() {
        let err = ProxyError::UpstreamFailure {
            status: Some(502),
            message: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "upstream request failed with status 502: bad gateway");
    }
}
