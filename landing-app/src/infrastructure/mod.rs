mod completion;
pub mod openrouter;
pub mod template;

pub use completion::CompletionClient;

#[cfg(test)]
pub(crate) use completion::fakes;
