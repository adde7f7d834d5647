// src/checker/result.rs
// =============================================================================
// What checking one cell can produce.
//
// Every row ends up as exactly one `CheckResult`. Failures are variants of
// the enum, not `Err`s, so the run driver matches on them and keeps going.
// =============================================================================

use std::fmt;

/// Status cell text for a row without a usable URL
pub const NO_URL_MARKER: &str = "No valid URL.";

/// Status cell text for a row whose host refused the connection
pub const CONNECTION_REFUSED_MARKER: &str = "Connection was refused.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The server answered (whatever the status code)
    Success(Outcome),
    /// The cell was empty or not an absolute URL
    NoUrl,
    /// Transport-level failure: refused, reset, unresolvable host
    ConnectionRefused { url: String },
    /// Anything else: timeout, redirect loop, unsupported scheme...
    OtherError { url: String, message: String },
}

impl CheckResult {
    /// Text written into the status column
    pub fn status_text(&self) -> String {
        match self {
            CheckResult::Success(outcome) => outcome.status_text(),
            CheckResult::NoUrl => NO_URL_MARKER.to_string(),
            CheckResult::ConnectionRefused { .. } => CONNECTION_REFUSED_MARKER.to_string(),
            CheckResult::OtherError { message, .. } => format!("Error: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, CheckResult::Success(_))
    }

    pub fn content_type(&self) -> Option<&str> {
        match self {
            CheckResult::Success(outcome) => outcome.content_type.as_deref(),
            _ => None,
        }
    }

    pub fn redirect_chain(&self) -> Option<&RedirectChain> {
        match self {
            CheckResult::Success(outcome) => outcome.redirect_chain.as_ref(),
            _ => None,
        }
    }
}

/// Data captured from a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: u16,
    pub reason: Option<String>,
    pub content_type: Option<String>,
    pub redirect_chain: Option<RedirectChain>,
}

impl Outcome {
    /// "200; OK", or just "299" when the code has no reason phrase
    pub fn status_text(&self) -> String {
        match &self.reason {
            Some(reason) if !reason.is_empty() => format!("{}; {}", self.status, reason),
            _ => self.status.to_string(),
        }
    }
}

/// One intermediate response of a redirect chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub url: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectChain {
    pub hops: Vec<Hop>,
    pub final_status: u16,
}

// Renders as "url1;url2;...;<final status>" for the location column
impl fmt::Display for RedirectChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hop in &self.hops {
            write!(f, "{};", hop.url)?;
        }
        write!(f, "{}", self.final_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16, reason: Option<&str>) -> Outcome {
        Outcome {
            status,
            reason: reason.map(str::to_string),
            content_type: None,
            redirect_chain: None,
        }
    }

    #[test]
    fn test_status_text_with_and_without_reason() {
        assert_eq!(outcome(200, Some("OK")).status_text(), "200; OK");
        assert_eq!(outcome(404, Some("Not Found")).status_text(), "404; Not Found");
        assert_eq!(outcome(299, None).status_text(), "299");
        assert_eq!(outcome(299, Some("")).status_text(), "299");
    }

    #[test]
    fn test_markers_are_never_empty() {
        let results = [
            CheckResult::NoUrl,
            CheckResult::ConnectionRefused {
                url: "http://127.0.0.1:1/".to_string(),
            },
            CheckResult::OtherError {
                url: "http://x.test/".to_string(),
                message: "request timed out".to_string(),
            },
            CheckResult::Success(outcome(500, None)),
        ];
        for result in &results {
            assert!(!result.status_text().is_empty());
        }
        assert_eq!(results[0].status_text(), "No valid URL.");
        assert_eq!(results[1].status_text(), "Connection was refused.");
        assert_eq!(results[2].status_text(), "Error: request timed out");
    }

    #[test]
    fn test_redirect_chain_display() {
        let chain = RedirectChain {
            hops: vec![
                Hop {
                    url: "http://a.test/old".to_string(),
                    status: 301,
                },
                Hop {
                    url: "http://a.test/mid".to_string(),
                    status: 302,
                },
            ],
            final_status: 200,
        };
        assert_eq!(chain.to_string(), "http://a.test/old;http://a.test/mid;200");
    }

    #[test]
    fn test_error_classification() {
        assert!(CheckResult::NoUrl.is_error());
        assert!(!CheckResult::Success(outcome(404, None)).is_error());
        assert_eq!(CheckResult::NoUrl.content_type(), None);
    }
}
