use crate::{cursor::ArgCursor, CreateIndexError};
use shoal_types::{DistanceMetric, KeyDataType, Language, VectorDataType};

// Symbol tables for keyword-valued options. Matching is ASCII
// case-insensitive; the table spelling is the canonical one used in errors.
pub(crate) const KEY_DATA_TYPES: &[(&str, KeyDataType)] =
    &[("HASH", KeyDataType::Hash), ("JSON", KeyDataType::Json)];

pub(crate) const DISTANCE_METRICS: &[(&str, DistanceMetric)] = &[
    ("L2", DistanceMetric::L2),
    ("IP", DistanceMetric::Ip),
    ("COSINE", DistanceMetric::Cosine),
];

pub(crate) const VECTOR_DATA_TYPES: &[(&str, VectorDataType)] = &[
    ("FLOAT32", VectorDataType::Float32),
    ("FLOAT16", VectorDataType::Float16),
    ("BFLOAT16", VectorDataType::BFloat16),
    ("FLOAT64", VectorDataType::Float64),
];

pub(crate) const LANGUAGES: &[(&str, Language)] = &[("ENGLISH", Language::English)];

pub(crate) fn lookup_symbol<T: Copy>(token: &str, symbols: &[(&str, T)]) -> Option<T> {
    symbols
        .iter()
        .find(|(name, _)| token.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

pub(crate) fn expected_symbols<T>(symbols: &[(&str, T)]) -> String {
    let names = symbols
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    format!("one of {names}")
}

/// Decode an already-consumed token as an integer within `[min, max]`.
pub(crate) fn parse_u32(
    token: &str,
    keyword: &str,
    position: usize,
    min: u32,
    max: u32,
) -> Result<u32, CreateIndexError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| CreateIndexError::InvalidValue {
            keyword: keyword.to_string(),
            token: token.to_string(),
            position,
            expected: "an integer".to_string(),
        })?;
    if value < min as i64 || value > max as i64 {
        return Err(CreateIndexError::InvalidRange {
            keyword: keyword.to_string(),
            value,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(value as u32)
}

/// Consume the value of `keyword` and decode it as an integer in `[min, max]`.
pub(crate) fn take_u32(
    cursor: &mut ArgCursor,
    keyword: &str,
    min: u32,
    max: u32,
) -> Result<u32, CreateIndexError> {
    let position = cursor.position();
    let token = cursor.take_value(keyword)?;
    parse_u32(token, keyword, position, min, max)
}

/// Consume the value of `keyword` and decode it against a symbol table.
pub(crate) fn take_symbol<T: Copy>(
    cursor: &mut ArgCursor,
    keyword: &str,
    symbols: &[(&str, T)],
) -> Result<T, CreateIndexError> {
    let position = cursor.position();
    let token = cursor.take_value(keyword)?;
    lookup_symbol(token, symbols).ok_or_else(|| CreateIndexError::InvalidValue {
        keyword: keyword.to_string(),
        token: token.to_string(),
        position,
        expected: expected_symbols(symbols),
    })
}
