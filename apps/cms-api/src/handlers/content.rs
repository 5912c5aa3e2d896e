//! Content submission handler.

use actix_web::{HttpResponse, web};

use cms_core::domain::CandidateRecord;
use cms_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::observability::CorrelationId;
use crate::state::AppState;

pub const CREATED_MESSAGE: &str = "Content created successfully";

/// POST /api/cms/content
pub async fn create_content(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    body: web::Json<CandidateRecord>,
) -> AppResult<HttpResponse> {
    tracing::debug!(%correlation_id, "Content submission received");

    let record = state.content.submit(body.into_inner()).await?;

    tracing::info!(
        %correlation_id,
        content_id = %record.id,
        "Content submission accepted"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(record, CREATED_MESSAGE)))
}
