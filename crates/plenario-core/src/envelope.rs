//! JSON response envelopes shared by every route handler.
//!
//! Success: `{ success, data, source, timestamp }`, optionally with a
//! `pagination` block. Failure: `{ success, error, message, timestamp }`.

use serde_json::{json, Value};

/// Attribution string carried on every successful response.
pub const UPSTREAM_SOURCE: &str = "Câmara dos Deputados API";

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Wrap reshaped data in the success envelope.
pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data,
        "source": UPSTREAM_SOURCE,
        "timestamp": timestamp(),
    })
}

/// Success envelope with a pagination block.
pub fn success_paginated(data: Value, pagination: Value) -> Value {
    let mut envelope = success(data);
    envelope["pagination"] = pagination;
    envelope
}

/// Failure envelope. `error` is the short label, `message` the detail.
pub fn failure(error: &str, message: &str) -> Value {
    json!({
        "success": false,
        "error": error,
        "message": message,
        "timestamp": timestamp(),
    })
}
