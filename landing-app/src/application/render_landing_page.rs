use super::content_generator::{fallback_meta_description, fallback_title_tag, ContentGenerator};
use crate::domain::ProductData;
use crate::infrastructure::template::PageTemplate;
use landing_errors::AppError;
use serde::Serialize;

/// Stock levels below this show a scarcity notice.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Everything the landing page template can reference.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub product_name: &'a str,
    pub description: String,
    /// Set when `description` is the product's own text, which is emitted unescaped.
    pub description_is_markup: bool,
    pub price: &'a str,
    pub price_amount: Option<String>,
    pub main_image: Option<&'a str>,
    pub gallery_images: &'a [String],
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
    pub store_name: &'a str,
    pub alt_text: String,
    pub meta_description: String,
    pub title_tag: String,
}

pub struct RenderLandingPage {
    generator: ContentGenerator,
    template: PageTemplate,
    seo_metadata: bool,
}

impl RenderLandingPage {
    pub fn new(generator: ContentGenerator, template: PageTemplate) -> Self {
        Self {
            generator,
            template,
            seo_metadata: true,
        }
    }

    /// When disabled, the title tag and meta description use their fallbacks
    /// and only two completion calls are made per page.
    pub fn with_seo_metadata(mut self, enabled: bool) -> Self {
        self.seo_metadata = enabled;
        self
    }

    pub async fn render(&self, product: &ProductData, store_name: &str) -> Result<String, AppError> {
        product.validate()?;
        if store_name.trim().is_empty() {
            return Err(AppError::InvalidArgument("store name cannot be empty".to_string()));
        }

        tracing::info!(product = %product.name, store = %store_name, "Rendering landing page");
        let context = self.build_context(product, store_name).await?;
        let html = self.template.render(&context)?;
        tracing::info!(bytes = html.len(), "Landing page rendered");
        Ok(html)
    }

    async fn build_context<'a>(
        &self,
        product: &'a ProductData,
        store_name: &'a str,
    ) -> Result<RenderContext<'a>, AppError> {
        let description = self
            .generator
            .rewrite_description(&product.description)
            .await?;
        let alt_text = self
            .generator
            .generate_alt_text(&product.name, &product.description)
            .await?;

        let (meta_description, title_tag) = if self.seo_metadata {
            (
                self.generator
                    .generate_meta_description(&product.name, &product.description)
                    .await?,
                self.generator
                    .generate_title_tag(&product.name, store_name)
                    .await?,
            )
        } else {
            (
                fallback_meta_description(&product.name, &product.description),
                fallback_title_tag(&product.name, store_name),
            )
        };

        let price_amount = match product.price_amount() {
            Ok(amount) => Some(format!("{:.2}", amount)),
            Err(e) => {
                tracing::debug!("No structured price markup: {}", e);
                None
            }
        };

        let description_is_markup = description == product.description;

        Ok(RenderContext {
            product_name: &product.name,
            description,
            description_is_markup,
            price: &product.price,
            price_amount,
            main_image: product.main_image.as_deref(),
            gallery_images: &product.gallery_images,
            stock_quantity: product.stock_quantity,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            store_name,
            alt_text,
            meta_description,
            title_tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fakes::{AbsentClient, ScriptedClient};
    use crate::infrastructure::CompletionClient;
    use std::sync::Arc;

    fn renderer(client: Arc<dyn CompletionClient>) -> RenderLandingPage {
        RenderLandingPage::new(
            ContentGenerator::new(client),
            PageTemplate::builtin().unwrap(),
        )
    }

    fn sample_product() -> ProductData {
        ProductData::new(
            "Test Product",
            "A high-quality product with amazing features.",
            "99.99",
        )
        .with_main_image(Some("https://example.com/images/main.jpg".to_string()))
        .with_gallery_images(vec![
            "http://a/1.jpg".to_string(),
            "http://a/2.jpg".to_string(),
        ])
        .with_stock_quantity(15)
    }

    #[tokio::test]
    async fn test_renders_product_fields() {
        let html = renderer(Arc::new(AbsentClient))
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();

        assert!(html.contains("Test Product"));
        assert!(html.contains("99.99"));
        assert!(html.contains("https://example.com/images/main.jpg"));
        assert!(html.contains("Test Store"));
        assert!(html.contains("A high-quality product with amazing features."));
        assert!(html.contains("Test Product product image"));
        assert!(html.contains("<title>Test Product | Test Store</title>"));
        assert!(html.contains(r#"<meta itemprop="price" content="99.99">"#));
    }

    #[tokio::test]
    async fn test_gallery_images_in_order() {
        let html = renderer(Arc::new(AbsentClient))
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();

        let first = html.find("http://a/1.jpg").unwrap();
        let second = html.find("http://a/2.jpg").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_low_stock_notice() {
        let renderer = renderer(Arc::new(AbsentClient));

        let low = renderer
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();
        assert!(low.contains("Only 15 units remaining"));

        let plenty = renderer
            .render(&sample_product().with_stock_quantity(25), "Test Store")
            .await
            .unwrap();
        assert!(!plenty.contains("units remaining"));
        assert!(plenty.contains("In stock: 25 units"));

        let none = renderer
            .render(&sample_product().with_stock_quantity(0), "Test Store")
            .await
            .unwrap();
        assert!(none.contains("Only 0 units remaining"));
    }

    #[tokio::test]
    async fn test_generated_text_is_escaped() {
        let client = Arc::new(ScriptedClient::new(
            r#"{"raw": "lamp with 12\" shade <script>alert(1)</script> glow"}"#,
        ));
        let html = renderer(client)
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"alt="Lamp with 12&quot; shade &lt;script&gt;alert(1)"#));
        assert!(html.contains(r#"<meta name="description" content="Lamp with 12&quot; shade"#));
        assert!(html.contains(r#"src="https://example.com/images/main.jpg""#));
    }

    #[tokio::test]
    async fn test_fallback_description_keeps_product_markup() {
        let product = ProductData::new("Desk Lamp", "Warm <strong>dimmable</strong> light.", "25");
        let html = renderer(Arc::new(AbsentClient))
            .render(&product, "Test Store")
            .await
            .unwrap();

        assert!(html.contains(r#"itemprop="description">Warm <strong>dimmable</strong> light.</div>"#));
        assert!(html.contains("Desk Lamp - Warm &lt;strong&gt;dimmable"));
    }

    #[tokio::test]
    async fn test_missing_name_fails_before_generation() {
        let client = Arc::new(ScriptedClient::new("Should not be asked."));
        let renderer = renderer(client.clone());
        let mut product = sample_product();
        product.name = String::new();

        let result = renderer.render(&product, "Test Store").await;

        assert_eq!(result, Err(AppError::MissingField("name".to_string())));
        assert!(client.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_price_still_renders() {
        let product = ProductData::new("Suite", "Compliance automation.", "Depends on Requirements");
        let html = renderer(Arc::new(AbsentClient))
            .render(&product, "Kusala Tech")
            .await
            .unwrap();

        assert!(html.contains("Depends on Requirements"));
        assert!(!html.contains(r#"itemprop="price""#));
    }

    #[tokio::test]
    async fn test_generated_content_reaches_page() {
        let client = Arc::new(ScriptedClient::new(r#"{"raw": "studio quality sound"}"#));
        let html = renderer(client.clone())
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();

        assert!(html.contains("Studio quality sound."));
        assert_eq!(client.prompts.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_seo_metadata_disabled_skips_calls() {
        let client = Arc::new(ScriptedClient::new("Studio quality sound."));
        let renderer = renderer(client.clone()).with_seo_metadata(false);

        let html = renderer
            .render(&sample_product(), "Test Store")
            .await
            .unwrap();

        assert_eq!(client.prompts.lock().unwrap().len(), 2);
        assert!(html.contains("<title>Test Product | Test Store</title>"));
    }
}
