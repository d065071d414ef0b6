use business::domain::generation::errors::GenerationError;

use crate::dto::ApiErrorResponse;

/// Maps a non-success HTTP status and its body to a `GenerationError`.
pub fn map_status(status: u16, body: &str, model: &str) -> GenerationError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let message = match &parsed {
        Some(e) if !e.error.message.is_empty() => e.error.message.clone(),
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => body.trim().to_string(),
    };
    let key_invalid = parsed
        .as_ref()
        .is_some_and(|e| e.error.reasons().any(|r| r == "API_KEY_INVALID"));
    let mentions_quota = message.to_lowercase().contains("quota");

    match status {
        400 if key_invalid => GenerationError::Authentication { message },
        400 => GenerationError::InvalidRequest { message },
        401 => GenerationError::Authentication { message },
        403 if mentions_quota => GenerationError::QuotaExceeded { message },
        403 => GenerationError::Authentication { message },
        404 => GenerationError::ModelNotFound {
            model: model.to_string(),
        },
        429 => GenerationError::QuotaExceeded { message },
        _ => GenerationError::Service { status, message },
    }
}

/// Maps a reqwest failure that produced no HTTP response.
///
/// Builder errors come from the request itself (e.g. a key that is not a
/// valid header value), so they are not reported as network failures.
pub fn map_transport(error: reqwest::Error) -> GenerationError {
    if error.is_builder() {
        GenerationError::InvalidRequest {
            message: error.to_string(),
        }
    } else {
        GenerationError::Network {
            message: error.to_string(),
        }
    }
}
