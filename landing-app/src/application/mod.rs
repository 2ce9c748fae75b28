mod content_generator;
pub mod normalizer;
mod render_landing_page;

pub use content_generator::{
    fallback_alt_text, fallback_description, fallback_meta_description, fallback_title_tag,
    intention, ContentGenerator,
};
pub use normalizer::normalize;
pub use render_landing_page::{RenderContext, RenderLandingPage, LOW_STOCK_THRESHOLD};
