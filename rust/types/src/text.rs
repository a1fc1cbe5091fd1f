use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_MIN_STEM_SIZE: u32 = 64;

pub fn default_with_offsets() -> bool {
    true
}

pub fn default_min_stem_size() -> u32 {
    4
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "english")]
    English,
}

/// Parameters for a full-text field. A field that does not override an
/// attribute inherits it from the schema-wide text defaults, if any were
/// declared, and otherwise from the values produced by the `default_*`
/// functions in this module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct TextIndexParams {
    /// Characters treated as token boundaries in addition to whitespace.
    #[serde(default)]
    pub punctuation: String,
    #[serde(default = "default_with_offsets")]
    pub with_offsets: bool,
    #[serde(default)]
    pub with_suffix_trie: bool,
    #[serde(default)]
    pub no_stem: bool,
    /// Tokens excluded from the index. Empty when stop words are disabled.
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_min_stem_size")]
    #[validate(range(min = 1, max = 64))]
    pub min_stem_size: u32,
}

impl Default for TextIndexParams {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_params_default() {
        let params = TextIndexParams::default();

        assert_eq!(params.punctuation, "");
        assert_eq!(params.with_offsets, default_with_offsets());
        assert!(!params.with_suffix_trie);
        assert!(!params.no_stem);
        assert!(params.stop_words.is_empty());
        assert_eq!(params.language, Language::English);
        assert_eq!(params.min_stem_size, default_min_stem_size());
    }

    #[test]
    fn test_deserialize_text_params_with_partial_fields() {
        let json = r#"{ "punctuation": ".,!?", "no_stem": true }"#;

        let params: TextIndexParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.punctuation, ".,!?");
        assert!(params.no_stem);
        assert_eq!(params.with_offsets, default_with_offsets());
        assert_eq!(params.min_stem_size, default_min_stem_size());
    }

    #[test]
    fn test_validate_rejects_zero_min_stem_size() {
        let params = TextIndexParams {
            min_stem_size: 0,
            ..Default::default()
        };

        assert!(params.validate().is_err());
    }
}
