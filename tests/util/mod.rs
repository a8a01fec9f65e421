//! Shared helpers for the integration tests.

use axum::{body::to_bytes, response::Response};
use pawhaven::server::validation::Input;
use serde_json::Value;

/// Request body as the `Input` extractor would produce it.
pub fn input(body: Value) -> Input {
    Input::from(body)
}

/// Reads a response body as JSON.
pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body is readable");

    serde_json::from_slice(&bytes).expect("response body is JSON")
}
