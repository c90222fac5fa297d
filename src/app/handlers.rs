use crate::app::state::AppState;
use crate::domain::model::{BlogRequest, BlogResponse, MarketingPlanRequest, PlanResponse};
use crate::utils::error::AppError;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

/// GET / - service metadata
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "AI Marketing Plan Generator API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.service.provider_name(),
        "endpoints": {
            "generate": "/generate - POST - Generate marketing plan",
            "generate-blog": "/generate-blog - POST - Generate SEO blog post",
            "health": "/health - GET - Health check"
        }
    }))
}

/// GET /health - reports whether the provider has an API key
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "llm_provider": state.service.provider_name(),
        "api_key_configured": state.service.is_configured(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// POST /generate - marketing plan, returned as the provider wrote it
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<MarketingPlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(request) = payload?;

    let plan = state.service.generate_marketing_plan(&request).await?;

    Ok(Json(PlanResponse {
        plan,
        provider: state.service.provider_name().to_string(),
    }))
}

/// POST /generate-blog - SEO blog post with normalized tables
pub async fn generate_blog(
    State(state): State<AppState>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<Json<BlogResponse>, AppError> {
    let Json(request) = payload?;

    let blog = state.service.generate_blog(&request).await?;

    Ok(Json(BlogResponse { blog }))
}
