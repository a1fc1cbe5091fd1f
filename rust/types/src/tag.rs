use serde::{Deserialize, Serialize};

pub fn default_tag_separator() -> char {
    ','
}

/// Parameters for a tag field. Stored values are split on `separator` and
/// each piece is indexed as one tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagIndexParams {
    #[serde(default = "default_tag_separator")]
    pub separator: char,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for TagIndexParams {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}
