use landing_errors::AppError;
use std::path::PathBuf;

pub const DEFAULT_STORE_NAME: &str = "Tech Haven";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Clone)]
pub struct AppConfig {
    pub openrouter_api_key: String,
    pub store_name: String,
    pub output_dir: PathBuf,
    pub template_path: Option<PathBuf>,
    pub seo_metadata: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openrouter_api_key = non_empty("OPENROUTER_API_KEY").ok_or(AppError::MissingApiKey)?;

        Ok(Self {
            openrouter_api_key,
            store_name: non_empty("STORE_NAME").unwrap_or_else(|| DEFAULT_STORE_NAME.to_string()),
            output_dir: non_empty("OUTPUT_DIR")
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            template_path: non_empty("TEMPLATE_PATH").map(PathBuf::from),
            seo_metadata: non_empty("SEO_METADATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    pub fn masked_api_key(&self) -> String {
        "*".repeat(self.openrouter_api_key.chars().count())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openrouter_api_key", &self.masked_api_key())
            .field("store_name", &self.store_name)
            .field("output_dir", &self.output_dir)
            .field("template_path", &self.template_path)
            .field("seo_metadata", &self.seo_metadata)
            .finish()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("OPENROUTER_API_KEY", "sk-or-123")]).unwrap();
        assert_eq!(config.store_name, "Tech Haven");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.template_path.is_none());
        assert!(config.seo_metadata);
    }

    #[test]
    fn test_missing_or_blank_key() {
        assert_eq!(config(&[]).unwrap_err(), AppError::MissingApiKey);
        assert_eq!(
            config(&[("OPENROUTER_API_KEY", "  ")]).unwrap_err(),
            AppError::MissingApiKey
        );
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("OPENROUTER_API_KEY", "sk-or-123"),
            ("STORE_NAME", "Kusala Tech"),
            ("OUTPUT_DIR", "pages"),
            ("TEMPLATE_PATH", "templates/custom.html"),
            ("SEO_METADATA", "off"),
        ])
        .unwrap();
        assert_eq!(config.store_name, "Kusala Tech");
        assert_eq!(config.output_dir, PathBuf::from("pages"));
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("templates/custom.html"))
        );
        assert!(!config.seo_metadata);
    }

    #[test]
    fn test_debug_masks_key() {
        let config = config(&[("OPENROUTER_API_KEY", "sk-or-123")]).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-or-123"));
        assert!(printed.contains("*********"));
    }
}
