//! REST helpers for the scrape and auth services.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` instead of panicking; callers
//! turn failures into status text or alerts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ResultsResponse, User};

#[cfg(any(test, feature = "csr"))]
fn results_endpoint(base: &str) -> String {
    format!("{base}/results")
}

#[cfg(any(test, feature = "csr"))]
fn latest_endpoint(base: &str) -> String {
    format!("{base}/latest")
}

#[cfg(any(test, feature = "csr"))]
fn scrape_endpoint(base: &str) -> String {
    format!("{base}/scrape")
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/signup")
}

/// Message recorded for a failed scrape request.
pub fn scrape_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Scrape error")
            .to_owned(),
        ApiError::Decode(_) => "Scrape error".to_owned(),
        ApiError::Transport(message) if !message.is_empty() => message.clone(),
        ApiError::Transport(_) | ApiError::Unavailable => "Scrape request failed".to_owned(),
    }
}

#[cfg(feature = "csr")]
async fn read_results(resp: gloo_net::http::Response) -> Result<ResultsResponse, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<ResultsResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    ApiError::Status { status, message }
}

/// Fetch stored results for `term` from one retailer via `GET /results?term=`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body is not JSON.
pub async fn fetch_results(base: &str, term: &str) -> Result<ResultsResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&results_endpoint(base))
            .query([("term", term)])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_results(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, term);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the most recent scrape from one retailer via `GET /latest`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body is not JSON.
pub async fn fetch_latest(base: &str) -> Result<ResultsResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&latest_endpoint(base))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_results(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Ask one retailer to scrape `term` via `POST /scrape`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the
/// service reports `status: "error"`.
pub async fn request_scrape(base: &str, term: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = super::types::ScrapeRequest { product: term };
        let resp = gloo_net::http::Request::post(&scrape_endpoint(base))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let body: super::types::ScrapeResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        match body.failure(ok) {
            None => Ok(()),
            Some(message) => Err(ApiError::Status { status, message: Some(message) }),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, term);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn read_user(resp: gloo_net::http::Response) -> Result<User, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body: super::types::AuthResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !ok {
        return Err(ApiError::Status { status, message: body.error });
    }
    body.user
        .ok_or_else(|| ApiError::Decode("response has no user".to_owned()))
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response carries no user.
pub async fn login(base: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(&login_endpoint(base))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_user(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the signup, or
/// the response carries no user.
pub async fn signup(base: &str, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = super::types::SignupRequest { name, email, password };
        let resp = gloo_net::http::Request::post(&signup_endpoint(base))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_user(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, name, email, password);
        Err(ApiError::Unavailable)
    }
}
