mod client;
pub mod prompt;
mod types;

pub use client::OpenRouterClient;
pub use prompt::ProtocolStamp;
