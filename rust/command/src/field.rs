use crate::{
    cursor::ArgCursor, text_options::TextOptions, vector::parse_vector_field, CreateIndexError,
};
use shoal_types::{FieldIndex, FieldSpec, TagIndexParams};

pub(crate) const AS: &str = "AS";
pub(crate) const TAG: &str = "TAG";
pub(crate) const NUMERIC: &str = "NUMERIC";
pub(crate) const TEXT: &str = "TEXT";
pub(crate) const VECTOR: &str = "VECTOR";
const SEPARATOR: &str = "SEPARATOR";
const CASESENSITIVE: &str = "CASESENSITIVE";

/// Parse one `<identifier> [AS <alias>] <kind> [options...]` declaration.
/// Schema-wide text defaults flow into TEXT fields through `defaults`.
pub(crate) fn parse_field(
    cursor: &mut ArgCursor,
    defaults: &TextOptions,
) -> Result<FieldSpec, CreateIndexError> {
    let identifier_position = cursor.position();
    let identifier = cursor.take_token("field identifier")?;
    if identifier.is_empty() {
        return Err(CreateIndexError::InvalidValue {
            keyword: "SCHEMA".to_string(),
            token: String::new(),
            position: identifier_position,
            expected: "a non-empty field identifier".to_string(),
        });
    }
    let identifier = identifier.to_string();

    let mut alias = None;
    if cursor
        .peek()
        .is_some_and(|token| token.eq_ignore_ascii_case(AS))
    {
        cursor.advance();
        let alias_position = cursor.position();
        let token = cursor.take_value(AS)?;
        if token.is_empty() {
            return Err(CreateIndexError::InvalidValue {
                keyword: AS.to_string(),
                token: String::new(),
                position: alias_position,
                expected: "a non-empty field alias".to_string(),
            });
        }
        alias = Some(token.to_string());
    }

    let kind_position = cursor.position();
    let kind = cursor.take_token("field type")?;
    let index = if kind.eq_ignore_ascii_case(TAG) {
        parse_tag_options(cursor)?
    } else if kind.eq_ignore_ascii_case(NUMERIC) {
        FieldIndex::Numeric
    } else if kind.eq_ignore_ascii_case(TEXT) {
        let mut options = TextOptions::default();
        while options.try_consume(cursor)? {}
        FieldIndex::Text(options.resolve(defaults))
    } else if kind.eq_ignore_ascii_case(VECTOR) {
        let name = alias.as_deref().unwrap_or(&identifier).to_string();
        parse_vector_field(cursor, &name)?
    } else {
        return Err(CreateIndexError::UnknownArgument {
            token: kind.to_string(),
            position: kind_position,
        });
    };

    Ok(FieldSpec {
        identifier,
        alias,
        index,
    })
}

fn parse_tag_options(cursor: &mut ArgCursor) -> Result<FieldIndex, CreateIndexError> {
    let mut separator = None;
    let mut case_sensitive = None;
    loop {
        let position = cursor.position();
        match cursor.peek() {
            Some(token) if token.eq_ignore_ascii_case(SEPARATOR) => {
                if separator.is_some() {
                    return Err(CreateIndexError::duplicate_option(SEPARATOR, position));
                }
                cursor.advance();
                let value_position = cursor.position();
                let token = cursor.take_value(SEPARATOR)?;
                let mut chars = token.chars();
                separator = match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(CreateIndexError::InvalidValue {
                            keyword: SEPARATOR.to_string(),
                            token: token.to_string(),
                            position: value_position,
                            expected: "a single character".to_string(),
                        })
                    }
                };
            }
            Some(token) if token.eq_ignore_ascii_case(CASESENSITIVE) => {
                if case_sensitive.is_some() {
                    return Err(CreateIndexError::duplicate_option(CASESENSITIVE, position));
                }
                cursor.advance();
                case_sensitive = Some(true);
            }
            _ => break,
        }
    }
    let mut params = TagIndexParams::default();
    if let Some(separator) = separator {
        params.separator = separator;
    }
    if let Some(case_sensitive) = case_sensitive {
        params.case_sensitive = case_sensitive;
    }
    Ok(FieldIndex::Tag(params))
}
