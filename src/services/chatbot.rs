// src/services/chatbot.rs
use super::provider::{ChatProvider, ProviderError};

const PROMPT_PREAMBLE: &str = "You are a friendly and empathetic healthcare assistant. Analyze the user's concern and provide a clear, concise response. Format your response in a conversational way, but include these key points:

1. Brief acknowledgment of their concern
2. Possible causes (if applicable)
3. Clear, actionable recommendations
4. When to seek professional help

Keep the tone warm and supportive. Avoid medical jargon unless necessary, and if used, explain it simply.

User's concern: ";

/// Wrap the user's message, verbatim, in the assistant instructions.
pub fn build_prompt(message: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREAMBLE.len() + message.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(message);
    prompt
}

/// Collapse double newlines (single pass, left to right) and trim.
pub fn format_reply(raw: &str) -> String {
    raw.replace("\n\n", "\n").trim().to_string()
}

/// One provider round trip for a validated message.
pub async fn generate_reply(
    provider: &dyn ChatProvider,
    message: &str,
) -> Result<String, ProviderError> {
    let prompt = build_prompt(message);
    let raw = provider.generate(&prompt).await?;
    Ok(format_reply(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatProvider for Echo {
        fn name(&self) -> &'static str {
            "Echo"
        }

        async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
            Ok(format!("\n\n{prompt}\n\n"))
        }
    }

    #[test]
    fn prompt_embeds_message_verbatim() {
        let prompt = build_prompt("I have a headache\n  since *yesterday*");
        assert!(prompt.starts_with("You are a friendly and empathetic healthcare assistant."));
        assert!(prompt.contains("4. When to seek professional help"));
        assert!(prompt.ends_with("User's concern: I have a headache\n  since *yesterday*"));
    }

    #[test]
    fn format_collapses_and_trims() {
        assert_eq!(format_reply("Hello\n\nWorld"), "Hello\nWorld");
        assert_eq!(format_reply("  \n\nHi\n\n\n"), "Hi");
        assert_eq!(format_reply("a\n\n\nb"), "a\n\nb");
        assert_eq!(format_reply("one\ntwo"), "one\ntwo");
    }

    #[tokio::test]
    async fn generate_reply_formats_provider_text() {
        let reply = generate_reply(&Echo, "cough").await.unwrap();
        assert!(reply.starts_with("You are"));
        assert!(reply.ends_with("User's concern: cough"));
        assert!(!reply.contains("\n\n1."));
    }
}
