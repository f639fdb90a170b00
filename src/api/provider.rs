use std::fmt;

use async_trait::async_trait;

use super::types::Listing;

/// Errors that can come out of a listing fetch.
/// Each variant carries the message the UI surfaces verbatim in a notice.
#[derive(Debug)]
pub enum FetchError {
    /// 2xx response with an empty or absent body. The user gets a
    /// "nothing loaded" notice — this is never a silent no-op.
    NoContent,
    /// Non-2xx status. `message` is the server's own wording: the response
    /// body when it has one, otherwise the canonical status reason.
    Http { status: u16, message: String },
    /// Network-level failure (DNS, refused connection, timeout) or a body
    /// that could not be decoded.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoContent => write!(f, "Could not load any apartments"),
            FetchError::Http { status, message } => {
                if message.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "{message}")
                }
            }
            FetchError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of apartment listings.
///
/// One invocation = one outbound request. Implementations do not retry,
/// cache, or deduplicate — calling `fetch_all` twice issues two independent
/// requests, and a failed call leaves no partial results behind.
#[async_trait]
pub trait ListingsProvider: Send + Sync {
    /// Returns the name of the provider (for logs).
    fn name(&self) -> &str;

    /// Fetches the full listing collection, in the order the backend sent it.
    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_message() {
        assert_eq!(
            FetchError::NoContent.to_string(),
            "Could not load any apartments"
        );
    }

    #[test]
    fn test_http_error_surfaces_server_message() {
        let err = FetchError::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn test_http_error_falls_back_to_status() {
        let err = FetchError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_transport_message_verbatim() {
        let err = FetchError::Transport("operation timed out".to_string());
        assert_eq!(err.to_string(), "operation timed out");
    }
}
