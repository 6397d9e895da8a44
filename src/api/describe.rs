//! Static, versioned API description served at `/docs.json`.
//!
//! Assembled separately from request-handling logic; replaces generated
//! interactive documentation.

use axum::Json;
use serde_json::{json, Value};

use crate::config;

pub fn api_description() -> Value {
    json!({
        "info": {
            "title": "Dokumentasi sistem API untuk pembersihan teks",
            "version": config::APP_VERSION,
            "description": "Sistem API untuk normalisasi teks tweet",
        },
        "paths": {
            "/": {
                "get": { "summary": "Greeting" }
            },
            "/text": {
                "get": { "summary": "Static sample text" }
            },
            "/text_clean": {
                "get": { "summary": "Cleaned version of the sample text" }
            },
            "/text-processing": {
                "post": {
                    "summary": "Clean one text and persist the original/cleaned pair",
                    "input": "urlencoded form field `text`"
                }
            },
            "/text-processing-file": {
                "post": {
                    "summary": "Clean every row of the Tweet column in an uploaded CSV",
                    "input": "multipart field `file`"
                }
            },
        },
    })
}

/// `GET /docs.json`
pub async fn docs() -> Json<Value> {
    Json(api_description())
}
