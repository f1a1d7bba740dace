use serde::{Deserialize, Serialize};

use crate::assistant::Lexicon;

/// Configuration from config.toml. Every section is optional; a missing
/// file yields the defaults, which reproduce the assistant's stock
/// behavior exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub lexicon: Lexicon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name used in the greeting response
    #[serde(default = "default_assistant_name")]
    pub name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            name: default_assistant_name(),
        }
    }
}

fn default_assistant_name() -> String {
    "Todo Assistant".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.assistant.name, "Todo Assistant");
        assert_eq!(config.lexicon, Lexicon::default());
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = toml::from_str(
            r#"
[assistant]
name = "Madadgar"

[lexicon]
greeting_triggers = ["hello", "salam", "adaab"]
"#,
        )
        .unwrap();
        assert_eq!(config.assistant.name, "Madadgar");
        assert_eq!(
            config.lexicon.greeting_triggers,
            vec!["hello", "salam", "adaab"]
        );
        // Untouched tables keep their defaults
        assert_eq!(config.lexicon.stop_words, Lexicon::default().stop_words);
    }
}
