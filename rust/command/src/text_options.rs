use crate::{
    cursor::ArgCursor,
    decode::{take_symbol, take_u32, LANGUAGES},
    CreateIndexError,
};
use shoal_types::{
    default_min_stem_size, default_with_offsets, Language, TextIndexParams, MAX_MIN_STEM_SIZE,
};

pub(crate) const PUNCTUATION: &str = "PUNCTUATION";
pub(crate) const WITHOFFSETS: &str = "WITHOFFSETS";
pub(crate) const NOOFFSETS: &str = "NOOFFSETS";
pub(crate) const WITHSUFFIXTRIE: &str = "WITHSUFFIXTRIE";
pub(crate) const NOSTEM: &str = "NOSTEM";
pub(crate) const STOPWORDS: &str = "STOPWORDS";
pub(crate) const NOSTOPWORDS: &str = "NOSTOPWORDS";
pub(crate) const LANGUAGE: &str = "LANGUAGE";
pub(crate) const MINSTEMSIZE: &str = "MINSTEMSIZE";

/// Text options accepted both schema-wide (before SCHEMA) and on individual
/// text fields. Every attribute is optional here; [`TextOptions::resolve`]
/// layers a field's options over the schema-wide ones and fills what remains
/// from the built-in defaults.
#[derive(Clone, Debug, Default)]
pub(crate) struct TextOptions {
    pub punctuation: Option<String>,
    pub with_offsets: Option<bool>,
    pub with_suffix_trie: Option<bool>,
    pub no_stem: Option<bool>,
    pub stop_words: Option<Vec<String>>,
    pub no_stop_words: Option<bool>,
    pub language: Option<Language>,
    pub min_stem_size: Option<u32>,
}

impl TextOptions {
    pub fn is_empty(&self) -> bool {
        self.punctuation.is_none()
            && self.with_offsets.is_none()
            && self.with_suffix_trie.is_none()
            && self.no_stem.is_none()
            && self.stop_words.is_none()
            && self.no_stop_words.is_none()
            && self.language.is_none()
            && self.min_stem_size.is_none()
    }

    /// Consume one text option if the cursor is positioned on one. Returns
    /// false, leaving the cursor untouched, when the next token is not a text
    /// option keyword.
    pub fn try_consume(&mut self, cursor: &mut ArgCursor) -> Result<bool, CreateIndexError> {
        let Some(token) = cursor.peek() else {
            return Ok(false);
        };
        let position = cursor.position();

        if token.eq_ignore_ascii_case(PUNCTUATION) {
            cursor.advance();
            if self.punctuation.is_some() {
                return Err(CreateIndexError::duplicate_option(PUNCTUATION, position));
            }
            let value_position = cursor.position();
            let value = cursor.take_value(PUNCTUATION)?;
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_punctuation()) {
                return Err(CreateIndexError::InvalidValue {
                    keyword: PUNCTUATION.to_string(),
                    token: value.to_string(),
                    position: value_position,
                    expected: "a non-empty string of ASCII punctuation characters".to_string(),
                });
            }
            self.punctuation = Some(value.to_string());
        } else if token.eq_ignore_ascii_case(WITHOFFSETS) {
            cursor.advance();
            if self.with_offsets.is_some() {
                return Err(CreateIndexError::duplicate_option(WITHOFFSETS, position));
            }
            self.with_offsets = Some(true);
        } else if token.eq_ignore_ascii_case(NOOFFSETS) {
            cursor.advance();
            if self.with_offsets.is_some() {
                return Err(CreateIndexError::duplicate_option(NOOFFSETS, position));
            }
            self.with_offsets = Some(false);
        } else if token.eq_ignore_ascii_case(WITHSUFFIXTRIE) {
            cursor.advance();
            if self.with_suffix_trie.is_some() {
                return Err(CreateIndexError::duplicate_option(WITHSUFFIXTRIE, position));
            }
            self.with_suffix_trie = Some(true);
        } else if token.eq_ignore_ascii_case(NOSTEM) {
            cursor.advance();
            if self.no_stem.is_some() {
                return Err(CreateIndexError::duplicate_option(NOSTEM, position));
            }
            self.no_stem = Some(true);
        } else if token.eq_ignore_ascii_case(STOPWORDS) {
            cursor.advance();
            if self.stop_words.is_some() {
                return Err(CreateIndexError::duplicate_option(STOPWORDS, position));
            }
            if self.no_stop_words.is_some() {
                return Err(CreateIndexError::MutuallyExclusiveOptions {
                    first: NOSTOPWORDS,
                    second: STOPWORDS,
                });
            }
            let count = take_u32(cursor, STOPWORDS, 0, u32::MAX)?;
            let mut words = Vec::new();
            for _ in 0..count {
                words.push(cursor.take_token("STOPWORDS list")?.to_string());
            }
            self.stop_words = Some(words);
        } else if token.eq_ignore_ascii_case(NOSTOPWORDS) {
            cursor.advance();
            if self.no_stop_words.is_some() {
                return Err(CreateIndexError::duplicate_option(NOSTOPWORDS, position));
            }
            if self.stop_words.is_some() {
                return Err(CreateIndexError::MutuallyExclusiveOptions {
                    first: STOPWORDS,
                    second: NOSTOPWORDS,
                });
            }
            self.no_stop_words = Some(true);
        } else if token.eq_ignore_ascii_case(LANGUAGE) {
            cursor.advance();
            if self.language.is_some() {
                return Err(CreateIndexError::duplicate_option(LANGUAGE, position));
            }
            self.language = Some(take_symbol(cursor, LANGUAGE, LANGUAGES)?);
        } else if token.eq_ignore_ascii_case(MINSTEMSIZE) {
            cursor.advance();
            if self.min_stem_size.is_some() {
                return Err(CreateIndexError::duplicate_option(MINSTEMSIZE, position));
            }
            self.min_stem_size = Some(take_u32(cursor, MINSTEMSIZE, 1, MAX_MIN_STEM_SIZE)?);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Layer these options over `defaults` attribute by attribute and fill
    /// the rest from the built-in defaults. The stop-word list and its
    /// disable flag act as a single attribute: whichever scope spoke last
    /// about stop words wins wholesale.
    pub fn resolve(&self, defaults: &TextOptions) -> TextIndexParams {
        let stop_words = match (self.no_stop_words, &self.stop_words) {
            (Some(true), _) => Vec::new(),
            (_, Some(words)) => words.clone(),
            _ => match (defaults.no_stop_words, &defaults.stop_words) {
                (Some(true), _) => Vec::new(),
                (_, Some(words)) => words.clone(),
                _ => Vec::new(),
            },
        };
        TextIndexParams {
            punctuation: self
                .punctuation
                .clone()
                .or_else(|| defaults.punctuation.clone())
                .unwrap_or_default(),
            with_offsets: self
                .with_offsets
                .or(defaults.with_offsets)
                .unwrap_or(default_with_offsets()),
            with_suffix_trie: self
                .with_suffix_trie
                .or(defaults.with_suffix_trie)
                .unwrap_or(false),
            no_stem: self.no_stem.or(defaults.no_stem).unwrap_or(false),
            stop_words,
            language: self.language.or(defaults.language).unwrap_or_default(),
            min_stem_size: self
                .min_stem_size
                .or(defaults.min_stem_size)
                .unwrap_or(default_min_stem_size()),
        }
    }
}
