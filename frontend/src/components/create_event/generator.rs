use gloo_timers::future::TimeoutFuture;

use common::generation::{
    ContentGenerator, GenerationRequest, LocalBoxFuture, TemplateGenerator,
};

use crate::config::GENERATION_DELAY_MS;

/// Template generator behind a fixed delay, standing in for a remote
/// generation service. Always resolves; there is no cancellation.
pub struct MockGenerator {
    delay_ms: u32,
    templates: TemplateGenerator,
}

impl MockGenerator {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            templates: TemplateGenerator,
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(GENERATION_DELAY_MS)
    }
}

impl ContentGenerator for MockGenerator {
    fn generate(&self, request: GenerationRequest) -> LocalBoxFuture<'static, String> {
        let delay_ms = self.delay_ms;
        let rendered = self.templates.generate(request);
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            rendered.await
        })
    }
}
