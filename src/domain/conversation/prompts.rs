//! Fixed chat copy: the greeting, the fallback reply and the suggestion list.

/// Assistant reply appended when a completion request fails.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Topic-agnostic questions offered as conversation starters.
pub const SUGGESTED_PROMPTS: [&str; 8] = [
    "What are the top career opportunities in this field?",
    "What skills should I develop for this stream?",
    "What's the average salary range for careers in this field?",
    "Which colleges offer the best programs for this stream?",
    "What are the future prospects in this industry?",
    "How can I prepare for entrance exams in this field?",
    "What internship opportunities are available?",
    "What are the different specializations I can choose?",
];

/// Opening assistant message of a session about `topic`.
pub fn greeting(topic: &str) -> String {
    format!(
        "Hello! I'm your AI career counselor for {}. I'm here to help you explore career \
         opportunities, understand requirements, and answer any questions about this field. \
         How can I assist you today?",
        topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_topic() {
        let text = greeting("Commerce");
        assert!(text.starts_with("Hello! I'm your AI career counselor for Commerce."));
        assert!(text.ends_with("How can I assist you today?"));
    }

    #[test]
    fn suggestions_are_distinct_and_non_blank() {
        let mut seen = std::collections::HashSet::new();
        for prompt in SUGGESTED_PROMPTS {
            assert!(!prompt.trim().is_empty());
            assert!(seen.insert(prompt));
        }
    }
}
