use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use sygil::{ChatRequest, ChatResponse, TextBackend};

use crate::app::AppState;

/// Error body returned on generation failure.
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Chat endpoint: one question in, one multi-perspective answer out.
///
/// Engine failures (either backend call) map to a single 500 with the
/// error text in `detail`; parse degradation inside the engine never
/// reaches this layer.
pub async fn chat_handler<B: TextBackend>(
    Extension(state): Extension<AppState<B>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    match state
        .engine
        .generate(&request.user_text, request.previous_response_id.as_deref())
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}
