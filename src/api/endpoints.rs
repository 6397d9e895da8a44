//! Route handlers.
//!
//! Every endpoint is a single stateless request/response cycle with at most
//! one persistence side effect.

use axum::extract::{Multipart, State};
use axum::{Form, Json};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Envelope, ProcessedResponse};
use crate::dataset;
use crate::db;
use crate::normalize::normalize;

/// Fixed sample used by `/text` and `/text_clean`.
pub const SAMPLE_TEXT: &str = "Halo, apa kabar semua? @username RT";

/// `GET /` — greeting.
pub async fn greeting() -> Json<Envelope<&'static str>> {
    Json(Envelope::ok(
        "Halo, ini merupakan sistem API untuk pembersihan teks",
        "Hello World",
    ))
}

/// `GET /text` — fixed sample string.
pub async fn sample_text() -> Json<Envelope<&'static str>> {
    Json(Envelope::ok("Ini teks asli, bukan yang palsu", SAMPLE_TEXT))
}

/// `GET /text_clean` — cleaned version of the fixed sample.
pub async fn sample_text_clean() -> Json<Envelope<String>> {
    Json(Envelope::ok(
        "Berikut ini merupakan teks yang sudah dibersihkan",
        normalize(SAMPLE_TEXT),
    ))
}

#[derive(Deserialize)]
pub struct ProcessTextForm {
    text: Option<String>,
}

/// `POST /text-processing` — clean one text and persist the pair.
pub async fn process_text(
    State(ctx): State<ApiContext>,
    Form(form): Form<ProcessTextForm>,
) -> Result<Json<ProcessedResponse>, ApiError> {
    // An absent field is undefined input for the normalizer; reject it here.
    // An empty string is a valid (if noisy) tweet.
    let text = form
        .text
        .ok_or_else(|| ApiError::Validation("Missing required form field `text`".into()))?;

    let cleaned = normalize(&text);

    // Fresh connection per persistence operation; dropped on every exit path.
    let conn = ctx.open_db()?;
    let id = db::insert_text_record(&conn, &text, &cleaned)?;
    tracing::debug!(id, "Stored text record");

    Ok(Json(ProcessedResponse {
        status_code: 200,
        description: "Berikut ini merupakan teks yang sudah diproses".to_string(),
        data_raw: text,
        data_clean: cleaned,
    }))
}

/// `POST /text-processing-file` — clean every row of the `Tweet` column in
/// an uploaded CSV. Batch rows are not persisted.
pub async fn process_file(
    mut multipart: Multipart,
) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read file data: {e}")))?;
            file_data = Some(bytes.to_vec());
        }
    }

    let bytes = file_data
        .ok_or_else(|| ApiError::Validation("Missing required multipart field `file`".into()))?;

    let tweets = dataset::extract_tweets(&bytes)?;
    let cleaned: Vec<String> = tweets.iter().map(|t| normalize(t)).collect();

    Ok(Json(Envelope::ok("Teks yang sudah diproses", cleaned)))
}
