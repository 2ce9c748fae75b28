use landing_errors::AppError;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "landing_page.html";
const BUILTIN_TEMPLATE: &str = include_str!("../../../templates/landing_page.html");

/// A parsed landing page template, ready to render any serializable context.
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_source(BUILTIN_TEMPLATE)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded landing page template from {}", path.display());
        Self::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| AppError::Template(describe(&e)))?;
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, AppError> {
        let context =
            Context::from_serialize(data).map_err(|e| AppError::Template(describe(&e)))?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| AppError::Template(describe(&e)))
    }
}

fn describe(err: &tera::Error) -> String {
    use std::error::Error;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
