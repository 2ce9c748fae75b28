mod page_template;

pub use page_template::PageTemplate;
