use super::normalizer::normalize;
use crate::domain::{
    truncate_chars, GeneratedContent, ProductData, ALT_TEXT_MAX_CHARS,
    META_DESCRIPTION_MAX_CHARS, TITLE_TAG_MAX_CHARS,
};
use crate::infrastructure::openrouter::prompt::{
    alt_text_instruction, build_dharma_prompt, meta_description_instruction,
    rewrite_description_instruction, title_tag_instruction,
};
use crate::infrastructure::openrouter::ProtocolStamp;
use crate::infrastructure::CompletionClient;
use landing_errors::AppError;
use std::sync::Arc;

const META_FALLBACK_DESCRIPTION_CHARS: usize = 100;

pub mod intention {
    pub const CONTENT: &str = "CONTENT";
    pub const SEO: &str = "SEO";
    pub const ACCESSIBILITY: &str = "ACCESSIBILITY";
}

/// Produces marketing copy and SEO metadata for a product.
///
/// Every operation validates its inputs, asks the completion client once and
/// normalizes the answer. When the client has nothing usable the result is a
/// fallback built from the inputs alone, so only validation can fail.
pub struct ContentGenerator {
    client: Arc<dyn CompletionClient>,
}

impl ContentGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn rewrite_description(&self, description: &str) -> Result<String, AppError> {
        require("description", description)?;

        let generated = self
            .generate(
                intention::CONTENT,
                rewrite_description_instruction(description),
                None,
            )
            .await;
        Ok(generated.unwrap_or_else(|| fallback_description(description)))
    }

    pub async fn generate_meta_description(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, AppError> {
        require("name", name)?;
        require("description", description)?;

        let generated = self
            .generate(
                intention::SEO,
                meta_description_instruction(name, description),
                Some(META_DESCRIPTION_MAX_CHARS),
            )
            .await;
        Ok(generated.unwrap_or_else(|| fallback_meta_description(name, description)))
    }

    pub async fn generate_title_tag(&self, name: &str, store_name: &str) -> Result<String, AppError> {
        require("name", name)?;
        require("store name", store_name)?;

        let generated = self
            .generate(
                intention::SEO,
                title_tag_instruction(name, store_name),
                Some(TITLE_TAG_MAX_CHARS),
            )
            .await;
        Ok(generated.unwrap_or_else(|| fallback_title_tag(name, store_name)))
    }

    pub async fn generate_alt_text(&self, name: &str, description: &str) -> Result<String, AppError> {
        require("name", name)?;
        require("description", description)?;

        let generated = self
            .generate(
                intention::ACCESSIBILITY,
                alt_text_instruction(name, description),
                Some(ALT_TEXT_MAX_CHARS),
            )
            .await;
        Ok(generated.unwrap_or_else(|| fallback_alt_text(name)))
    }

    /// Runs all four operations for one product. Each field falls back on its own.
    pub async fn generate_all(
        &self,
        product: &ProductData,
        store_name: &str,
    ) -> Result<GeneratedContent, AppError> {
        Ok(GeneratedContent {
            rewritten_description: self.rewrite_description(&product.description).await?,
            meta_description: self
                .generate_meta_description(&product.name, &product.description)
                .await?,
            title_tag: self.generate_title_tag(&product.name, store_name).await?,
            alt_text: self
                .generate_alt_text(&product.name, &product.description)
                .await?,
        })
    }

    async fn generate(
        &self,
        intention: &str,
        instruction: String,
        max_chars: Option<usize>,
    ) -> Option<String> {
        let stamp = ProtocolStamp::now();
        let prompt = build_dharma_prompt(&instruction, intention, &stamp);
        tracing::debug!(intention, trace_id = %stamp.trace_id(), "Requesting generated content");

        let Some(raw) = self.client.complete(&prompt).await else {
            tracing::warn!(intention, "No completion returned, using fallback content");
            return None;
        };

        let cleaned = normalize(&raw);
        if cleaned.is_empty() {
            tracing::warn!(intention, "Completion normalized to nothing, using fallback content");
            return None;
        }

        Some(match max_chars {
            Some(limit) => truncate_chars(&cleaned, limit),
            None => cleaned,
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!("{} cannot be empty", field)));
    }
    Ok(())
}

pub fn fallback_description(description: &str) -> String {
    description.to_string()
}

pub fn fallback_meta_description(name: &str, description: &str) -> String {
    let excerpt = truncate_chars(description, META_FALLBACK_DESCRIPTION_CHARS);
    truncate_chars(
        &format!("{} - {}...", name, excerpt),
        META_DESCRIPTION_MAX_CHARS,
    )
}

pub fn fallback_title_tag(name: &str, store_name: &str) -> String {
    truncate_chars(&format!("{} | {}", name, store_name), TITLE_TAG_MAX_CHARS)
}

pub fn fallback_alt_text(name: &str) -> String {
    truncate_chars(&format!("{} product image", name), ALT_TEXT_MAX_CHARS)
}
