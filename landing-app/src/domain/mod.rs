mod generated_content;
mod product_data;

pub use generated_content::{
    truncate_chars, GeneratedContent, ALT_TEXT_MAX_CHARS, META_DESCRIPTION_MAX_CHARS,
    TITLE_TAG_MAX_CHARS,
};
pub use product_data::ProductData;
