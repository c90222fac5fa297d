use crate::core::markdown::normalize_markdown;
use crate::core::prompt::{build_blog_prompt, build_marketing_plan_prompt};
use crate::domain::model::{BlogRequest, MarketingPlanRequest};
use crate::domain::ports::TextGenerator;
use crate::utils::error::{AppError, Result};
use std::sync::Arc;

/// Prompt in, text out: one provider call per request.
#[derive(Clone)]
pub struct ContentService {
    generator: Arc<dyn TextGenerator>,
    convert_json_tables: bool,
}

impl ContentService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            convert_json_tables: true,
        }
    }

    pub fn with_json_tables(mut self, enabled: bool) -> Self {
        self.convert_json_tables = enabled;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.generator.provider_name()
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Calls the provider once. Provider errors are reported as
    /// `GenerationFailed` for `what`; blank output as `EmptyGeneration`.
    /// Whitespace-only text counts as blank, which is stricter than an
    /// empty-string check.
    async fn generate_once(&self, prompt: &str, what: &str, empty_message: &str) -> Result<String> {
        let text = self
            .generator
            .generate(prompt)
            .await
            .map_err(|e| {
                tracing::error!("Failed to generate {}: {}", what, e);
                AppError::GenerationFailed {
                    what: what.to_string(),
                    message: e.to_string(),
                }
            })?;

        if text.trim().is_empty() {
            tracing::error!("Empty {} generated", what);
            return Err(AppError::EmptyGeneration {
                message: empty_message.to_string(),
            });
        }

        Ok(text)
    }

    pub async fn generate_marketing_plan(&self, request: &MarketingPlanRequest) -> Result<String> {
        tracing::info!(
            "Generating marketing plan using {}",
            self.generator.provider_name()
        );

        let prompt = build_marketing_plan_prompt(request);
        let plan = self
            .generate_once(&prompt, "marketing plan", "No response generated")
            .await?;

        tracing::info!("Successfully generated plan ({} chars)", plan.len());
        tracing::debug!("Generated marketing plan:\n{}", plan);

        Ok(plan)
    }

    /// Validates the blog options before anything is sent to the provider.
    pub async fn generate_blog(&self, request: &BlogRequest) -> Result<String> {
        let (length, tone) = request.options()?;

        tracing::info!(
            "Generating SEO blog using {} (length={}, tone={})",
            self.generator.provider_name(),
            length,
            tone
        );

        let prompt = build_blog_prompt(request, length, tone);
        let blog = self
            .generate_once(&prompt, "blog", "No blog content generated")
            .await?;

        let blog = normalize_markdown(&blog, self.convert_json_tables);
        tracing::info!("Successfully generated blog ({} chars)", blog.len());

        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubGenerator {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        fn provider_name(&self) -> &str {
            "Stub"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().map_err(|message| AppError::ProviderError { message })
        }
    }

    fn marketing_request() -> MarketingPlanRequest {
        serde_json::from_value(serde_json::json!({
            "businessName": "Acme Coffee",
            "industry": "Food & Beverage",
            "targetAudience": "Remote workers",
            "productService": "Cold brew subscriptions",
            "budget": "$2,000/month",
            "goals": "Grow subscribers",
            "timeline": "3 months"
        }))
        .unwrap()
    }

    fn blog_request(length: &str, tone: &str) -> BlogRequest {
        serde_json::from_value(serde_json::json!({
            "topic": "Cold brew at home",
            "targetKeyword": "cold brew",
            "targetAudience": "Coffee fans",
            "blogLength": length,
            "tone": tone
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_marketing_plan_returned_raw() {
        let generator = Arc::new(StubGenerator::replying("|a|b|\n|-|-|"));
        let service = ContentService::new(generator.clone());

        let plan = service
            .generate_marketing_plan(&marketing_request())
            .await
            .unwrap();

        assert_eq!(plan, "|a|b|\n|-|-|");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Business Name: Acme Coffee"));
    }

    #[tokio::test]
    async fn test_blog_is_normalized() {
        let generator = Arc::new(StubGenerator::replying("# Post\n|a|b|\n|:-|-:|"));
        let service = ContentService::new(generator);

        let blog = service
            .generate_blog(&blog_request("500-800", "casual"))
            .await
            .unwrap();

        assert_eq!(blog, "# Post\n| a | b |\n| --- | --- |");
    }

    #[tokio::test]
    async fn test_blog_json_tables_can_be_disabled() {
        let text = "```table_json\n{\"headers\": [\"A\"], \"rows\": [[\"1\"]]}\n```";
        let service =
            ContentService::new(Arc::new(StubGenerator::replying(text))).with_json_tables(false);

        let blog = service
            .generate_blog(&blog_request("2000+", "professional"))
            .await
            .unwrap();
        assert_eq!(blog, text);
    }

    #[tokio::test]
    async fn test_invalid_options_skip_provider() {
        let generator = Arc::new(StubGenerator::replying("unused"));
        let service = ContentService::new(generator.clone());

        let err = service
            .generate_blog(&blog_request("500-800", "sarcastic"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidOption { ref field, .. } if field == "tone"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_generation() {
        let service = ContentService::new(Arc::new(StubGenerator::replying("  \n")));

        let err = service
            .generate_marketing_plan(&marketing_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyGeneration { .. }));
        assert_eq!(err.to_string(), "No response generated");

        let err = service
            .generate_blog(&blog_request("500-800", "casual"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No blog content generated");
    }

    #[tokio::test]
    async fn test_provider_failure_carries_cause() {
        let service = ContentService::new(Arc::new(StubGenerator::failing("quota exceeded")));

        let err = service
            .generate_marketing_plan(&marketing_request())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to generate marketing plan: quota exceeded"
        );
    }
}
