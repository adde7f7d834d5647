// src/checker/redirect.rs
// =============================================================================
// Following redirects by hand.
//
// reqwest can follow redirects on its own, but then it throws the
// intermediate responses away. We need them for the redirect chain, so the
// client is built with `Policy::none()` and this loop does the following.
// =============================================================================

use reqwest::header::LOCATION;
use reqwest::{Client, Method, Response, StatusCode};
use url::Url;

use super::result::Hop;

/// The final response plus every redirect that led to it
pub struct Followed {
    pub response: Response,
    pub hops: Vec<Hop>,
}

#[derive(Debug, thiserror::Error)]
pub enum FollowError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("too many redirects (more than {0})")]
    TooManyRedirects(usize),

    #[error("invalid redirect from {from} to '{location}'")]
    BadLocation { from: String, location: String },
}

/// Sends `method` to `start` and keeps going while the server redirects
pub async fn follow(
    client: &Client,
    method: Method,
    start: Url,
    max_redirects: usize,
) -> Result<Followed, FollowError> {
    let mut current = start;
    let mut hops = Vec::new();

    loop {
        let response = client.request(method.clone(), current.clone()).send().await?;
        let status = response.status();

        let location = match redirect_target(&response) {
            Some(location) => location,
            None => return Ok(Followed { response, hops }),
        };

        if hops.len() >= max_redirects {
            return Err(FollowError::TooManyRedirects(max_redirects));
        }

        // Location may be relative to the URL that answered
        let next = current.join(&location).map_err(|_| FollowError::BadLocation {
            from: current.to_string(),
            location: location.clone(),
        })?;

        tracing::debug!(from = %current, to = %next, status = status.as_u16(), "redirect");
        hops.push(Hop {
            url: current.to_string(),
            status: status.as_u16(),
        });
        current = next;
    }
}

// The Location header of a response that actually redirects
fn redirect_target(response: &Response) -> Option<String> {
    if !is_redirect(response.status()) {
        return None;
    }
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::redirect::Policy;

    fn client() -> Client {
        Client::builder().redirect(Policy::none()).build().unwrap()
    }

    #[test]
    fn test_is_redirect() {
        assert!(is_redirect(StatusCode::MOVED_PERMANENTLY));
        assert!(is_redirect(StatusCode::PERMANENT_REDIRECT));
        assert!(!is_redirect(StatusCode::NOT_MODIFIED));
        assert!(!is_redirect(StatusCode::OK));
    }

    #[test]
    fn test_follow_error_messages() {
        assert_eq!(
            FollowError::TooManyRedirects(5).to_string(),
            "too many redirects (more than 5)"
        );
        let bad = FollowError::BadLocation {
            from: "http://a.test/".to_string(),
            location: "http://[broken".to_string(),
        };
        assert_eq!(
            bad.to_string(),
            "invalid redirect from http://a.test/ to 'http://[broken'"
        );
    }

    #[tokio::test]
    async fn test_follow_records_hops() {
        let mut server = mockito::Server::new_async().await;
        let _a = server
            .mock("GET", "/a")
            .with_status(301)
            .with_header("location", "/b")
            .create_async()
            .await;
        let _b = server
            .mock("GET", "/b")
            .with_status(302)
            .with_header("location", &format!("{}/c", server.url()))
            .create_async()
            .await;
        let _c = server.mock("GET", "/c").with_status(200).create_async().await;

        let start = Url::parse(&format!("{}/a", server.url())).unwrap();
        let followed = follow(&client(), Method::GET, start, 10).await.unwrap();

        assert_eq!(followed.response.status(), StatusCode::OK);
        assert_eq!(
            followed.hops,
            vec![
                Hop {
                    url: format!("{}/a", server.url()),
                    status: 301
                },
                Hop {
                    url: format!("{}/b", server.url()),
                    status: 302
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_follow_stops_on_loop() {
        let mut server = mockito::Server::new_async().await;
        let _loop = server
            .mock("GET", "/loop")
            .with_status(302)
            .with_header("location", "/loop")
            .expect_at_least(1)
            .create_async()
            .await;

        let start = Url::parse(&format!("{}/loop", server.url())).unwrap();
        let err = follow(&client(), Method::GET, start, 3).await.err().unwrap();
        assert!(matches!(err, FollowError::TooManyRedirects(3)));
    }

    #[tokio::test]
    async fn test_redirect_without_location_is_final() {
        let mut server = mockito::Server::new_async().await;
        let _m = server.mock("GET", "/moved").with_status(301).create_async().await;

        let start = Url::parse(&format!("{}/moved", server.url())).unwrap();
        let followed = follow(&client(), Method::GET, start, 10).await.unwrap();
        assert_eq!(followed.response.status(), StatusCode::MOVED_PERMANENTLY);
        assert!(followed.hops.is_empty());
    }
}
