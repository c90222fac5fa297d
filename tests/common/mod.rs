#![allow(dead_code)]

//! Shared helpers for the HTTP integration tests

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use marketing_planner::domain::ports::TextGenerator;
use marketing_planner::{build_router, AppError, AppState, ContentService, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Canned provider: replies with fixed text or a fixed failure.
pub struct StubGenerator {
    reply: std::result::Result<String, String>,
    configured: bool,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("GOOGLE_API_KEY is not configured".to_string()),
            configured: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn provider_name(&self) -> &str {
        "Stub Provider"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .map_err(|message| AppError::ProviderError { message })
    }
}

pub fn app_with(generator: Arc<dyn TextGenerator>) -> Router {
    build_router(AppState::new(ContentService::new(generator)))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn marketing_body() -> serde_json::Value {
    serde_json::json!({
        "businessName": "Acme Coffee",
        "industry": "Food & Beverage",
        "productService": "Cold brew subscriptions",
        "targetAudience": "Remote workers",
        "budget": "$2,000/month",
        "goals": "Grow subscribers",
        "timeline": "3 months",
        "uniqueSellingPoint": "Single-origin beans"
    })
}

pub fn blog_body(length: &str, tone: &str) -> serde_json::Value {
    serde_json::json!({
        "topic": "Cold brew at home",
        "targetKeyword": "cold brew",
        "targetAudience": "Coffee fans",
        "blogLength": length,
        "tone": tone
    })
}
