use async_trait::async_trait;

/// Text-completion capability used by the content generator.
///
/// Implementations own transport and provider details. Any failure (network,
/// HTTP status, unexpected payload) is reported as `None` so callers can fall
/// back to locally derived content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Option<String>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::CompletionClient;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Behaves like a provider that is always down.
    pub(crate) struct AbsentClient;

    #[async_trait]
    impl CompletionClient for AbsentClient {
        async fn complete(&self, _prompt: &str) -> Option<String> {
            None
        }
    }

    /// Answers every prompt with the same text and remembers what it was asked.
    pub(crate) struct ScriptedClient {
        reply: String,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        pub(crate) fn new(reply: impl Into<String>) -> Self {
            Self {
                reply: reply.into(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, prompt: &str) -> Option<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Some(self.reply.clone())
        }
    }
}
