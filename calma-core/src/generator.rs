use crate::capability::{CapabilityError, GenerationCapability};
use std::sync::Arc;
use tracing::{debug, warn};

/// Instruction every user message is wrapped in.
pub const PERSONA: &str = "You are a kind, empathetic, and gentle mental health companion. \
Respond supportively to the user's message: ";

/// Upper bound on the generated reply, in model tokens.
pub const MAX_REPLY_LENGTH: usize = 150;

/// Produces companion replies through a text-generation capability.
///
/// Sampling is always on, so the same message can get different replies.
#[derive(Clone)]
pub struct ResponseGenerator {
    capability: Arc<dyn GenerationCapability>,
}

impl ResponseGenerator {
    pub fn new(capability: Arc<dyn GenerationCapability>) -> Self {
        Self { capability }
    }

    pub fn prompt_for(user_text: &str) -> String {
        format!("{PERSONA}{user_text}")
    }

    pub fn generate(&self, user_text: &str) -> Result<String, CapabilityError> {
        let prompt = Self::prompt_for(user_text);
        let reply = self
            .capability
            .generate(&prompt, MAX_REPLY_LENGTH, true)
            .inspect_err(|e| warn!(error = %e, "reply generation failed"))?;
        let reply = reply.trim().to_string();
        debug!(chars = reply.len(), "generated reply");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{FailingCapability, StubGenerator};

    #[test]
    fn wraps_text_in_persona() {
        let stub = Arc::new(StubGenerator::new("  I'm here for you.  "));
        let generator = ResponseGenerator::new(stub.clone());
        generator.generate("rough day").unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let (prompt, max_length, sample) = &calls[0];
        assert!(prompt.starts_with("You are a kind, empathetic"));
        assert!(prompt.ends_with("user's message: rough day"));
        assert_eq!(*max_length, MAX_REPLY_LENGTH);
        assert!(*sample);
    }

    #[test]
    fn reply_is_trimmed_and_non_empty() {
        let generator = ResponseGenerator::new(Arc::new(StubGenerator::new("\n  Hello.\t")));
        let reply = generator.generate("hi").unwrap();
        assert!(!reply.is_empty());
        assert_eq!(reply, reply.trim());
    }

    #[test]
    fn failures_propagate() {
        let generator = ResponseGenerator::new(Arc::new(FailingCapability));
        assert!(generator.generate("hi").is_err());
    }
}
