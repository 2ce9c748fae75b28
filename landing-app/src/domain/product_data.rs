use landing_errors::AppError;
use serde::{Deserialize, Serialize};

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '฿'];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub price: String,
    pub main_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub stock_quantity: u32,
}

impl ProductData {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    pub fn with_main_image(mut self, main_image: Option<String>) -> Self {
        self.main_image = main_image.filter(|url| !url.trim().is_empty());
        self
    }

    pub fn with_gallery_images(mut self, gallery_images: Vec<String>) -> Self {
        self.gallery_images = gallery_images;
        self
    }

    pub fn with_stock_quantity(mut self, stock_quantity: u32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// Checks the fields a landing page cannot be rendered without.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::MissingField("name".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::MissingField("description".to_string()));
        }
        if self.price.trim().is_empty() {
            return Err(AppError::InvalidFormat(
                "price must be a non-empty display string".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict numeric reading of the display price. A single leading currency
    /// symbol and thousands separators are accepted.
    pub fn price_amount(&self) -> Result<f64, AppError> {
        let trimmed = self.price.trim();
        let digits = trimmed
            .strip_prefix(CURRENCY_SYMBOLS)
            .unwrap_or(trimmed)
            .trim()
            .replace(',', "");

        digits
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(|| {
                AppError::InvalidFormat(format!("price '{}' is not a number", self.price))
            })
    }
}
