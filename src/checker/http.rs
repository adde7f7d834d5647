// src/checker/http.rs
// =============================================================================
// This module checks one URL by making an HTTP request.
//
// Key functionality:
// - Decides whether a cell holds a usable URL at all
// - Makes a GET (or HEAD) request and follows redirects
// - Captures status code, reason phrase and MIME type
// - Optionally builds the redirect chain for the location column
// - Turns every failure into a `CheckResult` variant (nothing is thrown)
//
// Requests are made one at a time: `check` is awaited to completion before
// the next row starts.
// =============================================================================

use std::error::Error as StdError;
use std::io::ErrorKind;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use url::Url;

use super::redirect::{self, FollowError, Followed};
use super::result::{CheckResult, Outcome, RedirectChain};
use crate::config::CheckerConfig;
use crate::error::Result;

pub struct LinkChecker {
    client: Client,
    config: CheckerConfig,
}

impl LinkChecker {
    // One client for the whole run (connection pooling)
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }

    /// Checks the value of a URL cell
    pub async fn check(&self, cell: Option<&str>) -> CheckResult {
        let url = match parse_cell(cell) {
            Some(url) => url,
            None => return CheckResult::NoUrl,
        };

        let method = self.config.method.as_reqwest();
        let followed =
            match redirect::follow(&self.client, method, url.clone(), self.config.max_redirects)
                .await
            {
                Ok(followed) => followed,
                Err(e) => return categorize_error(url.as_str(), e),
            };

        let Followed { response, hops } = followed;
        let status = response.status();
        let reason = reason_phrase(&response);
        let content_type = content_type(&response);

        let redirect_chain = if self.config.track_redirects && !hops.is_empty() {
            let final_status = if self.config.reconfirm_redirects {
                self.reconfirm(&hops[hops.len() - 1].url, status.as_u16()).await
            } else {
                status.as_u16()
            };
            Some(RedirectChain { hops, final_status })
        } else {
            None
        };

        CheckResult::Success(Outcome {
            status: status.as_u16(),
            reason,
            content_type,
            redirect_chain,
        })
    }

    // Requests the last hop of a chain again and returns where it ends up now.
    // The server may answer differently the second time; if the request fails
    // outright we keep the status we already have.
    async fn reconfirm(&self, last_hop: &str, known_status: u16) -> u16 {
        let url = match Url::parse(last_hop) {
            Ok(url) => url,
            Err(_) => return known_status,
        };
        let method = self.config.method.as_reqwest();
        match redirect::follow(&self.client, method, url, self.config.max_redirects).await {
            Ok(followed) => followed.response.status().as_u16(),
            Err(e) => {
                tracing::warn!(url = last_hop, error = %e, "could not re-confirm redirect target");
                known_status
            }
        }
    }
}

// Returns the URL in a cell, or None if there isn't a usable one
//
// "Usable" means absolute with a scheme: `not-a-url` and `example.com/page`
// are rejected here, `ftp://...` is not (the request fails later instead).
fn parse_cell(cell: Option<&str>) -> Option<Url> {
    let value = cell?.trim();
    if value.is_empty() {
        return None;
    }
    Url::parse(value).ok()
}

// The reason phrase the server sent ("200 Fine Thanks" -> "Fine Thanks")
//
// hyper only keeps the phrase when it differs from the standard one for the
// code, so a missing extension means the standard phrase (if any) was sent.
fn reason_phrase(response: &Response) -> Option<String> {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => Some(String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
        None => response.status().canonical_reason().map(str::to_string),
    }
}

// The MIME type part of the content-type header: "text/html; charset=utf-8" -> "text/html"
fn content_type(response: &Response) -> Option<String> {
    let header = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    mime_type(header)
}

fn mime_type(header: &str) -> Option<String> {
    let mime = header.split(';').next().unwrap_or("").trim();
    if mime.is_empty() {
        None
    } else {
        Some(mime.to_string())
    }
}

// Categorizes the ways a request can fail
//
// is_connect() covers refused connections and DNS failures; a peer that
// accepts and then resets or aborts the connection is treated the same.
fn categorize_error(url: &str, error: FollowError) -> CheckResult {
    let message = match &error {
        FollowError::Http(e) if e.is_connect() || is_connection_dropped(e) => {
            tracing::debug!(url, error = %e, "connection failed");
            return CheckResult::ConnectionRefused {
                url: url.to_string(),
            };
        }
        FollowError::Http(e) if e.is_timeout() => "request timed out".to_string(),
        FollowError::Http(e) if e.is_builder() => format!("could not build request: {}", e),
        other => other.to_string(),
    };
    tracing::debug!(url, %message, "request failed");
    CheckResult::OtherError {
        url: url.to_string(),
        message,
    }
}

// Looks through the error's sources for a transport-level io error
fn is_connection_dropped(error: &reqwest::Error) -> bool {
    let mut source = StdError::source(error);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::ConnectionRefused
            ) {
                return true;
            }
        }
        source = StdError::source(err);
    }
    false
}
