//! Completion backend trait definition

use async_trait::async_trait;

use crate::Result;

/// Trait for completion backends
///
/// Implementations relay a single user message to a chat completion
/// service and return the assistant's reply as plain text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Relay a message and wait for the complete reply
    ///
    /// # Arguments
    /// * `message` - The user's message, passed through verbatim
    ///
    /// # Example
    /// ```no_run
    /// use warden_relay::CompletionBackend;
    ///
    /// async fn example(backend: &dyn CompletionBackend) -> Result<(), Box<dyn std::error::Error>> {
    ///     let reply = backend.complete("Hello!").await?;
    ///     println!("{}", reply);
    ///     Ok(())
    /// }
    /// ```
    async fn complete(&self, message: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model(&self) -> &str;

    /// Get the backend name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock backend for testing
    struct MockBackend;

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(&self, _message: &str) -> Result<String> {
            Ok("Mock reply".to_string())
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend;
        let reply = backend.complete("test").await.unwrap();
        assert_eq!(reply, "Mock reply");
        assert_eq!(backend.model(), "mock-model");
        assert_eq!(backend.name(), "mock");
    }
}
