//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to a display string for the panel. The server's
//! `{"error": ...}` body is preferred over a bare status code when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use labs::blueprint::Blueprint;
#[cfg(any(test, feature = "hydrate"))]
use labs::blueprint::{ApiError, BlueprintRequest};

pub const BLUEPRINT_ENDPOINT: &str = "/api/blueprint";

#[cfg(any(test, feature = "hydrate"))]
fn blueprint_request_body(requirements: &str) -> BlueprintRequest {
    BlueprintRequest { requirements: requirements.trim().to_owned() }
}

/// Message for a non-2xx response, using the JSON error body when it parses.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) if !err.error.trim().is_empty() => err.error,
        _ => format!("blueprint request failed: {status}"),
    }
}

/// `POST /api/blueprint` with the user's requirements.
///
/// # Errors
///
/// Returns a display message on transport failure, non-2xx status, or a
/// malformed body.
pub async fn request_blueprint(requirements: &str) -> Result<Blueprint, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(BLUEPRINT_ENDPOINT)
            .json(&blueprint_request_body(requirements))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| format!("network error: {e}"))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_message(resp.status(), &body));
        }
        resp.json::<Blueprint>()
            .await
            .map_err(|e| format!("unexpected response: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = requirements;
        Err("not available during server rendering".to_owned())
    }
}
