use crate::application::{ContentGenerator, RenderLandingPage};
use crate::config::AppConfig;
use crate::infrastructure::openrouter::OpenRouterClient;
use crate::infrastructure::template::PageTemplate;
use crate::infrastructure::CompletionClient;
use landing_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub render_landing_page: Arc<RenderLandingPage>,
}

impl AppContext {
    pub fn new_openrouter(config: AppConfig) -> Result<Self, AppError> {
        let client = OpenRouterClient::new(config.openrouter_api_key.clone())?;
        tracing::info!("Using OpenRouter backend");
        Self::with_client(config, Arc::new(client))
    }

    pub fn with_client(
        config: AppConfig,
        client: Arc<dyn CompletionClient>,
    ) -> Result<Self, AppError> {
        let template = match &config.template_path {
            Some(path) => PageTemplate::from_file(path)?,
            None => PageTemplate::builtin()?,
        };
        let render_landing_page = RenderLandingPage::new(ContentGenerator::new(client), template)
            .with_seo_metadata(config.seo_metadata);

        Ok(Self {
            config,
            render_landing_page: Arc::new(render_landing_page),
        })
    }
}
