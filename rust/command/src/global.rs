use crate::{
    cursor::ArgCursor,
    decode::{take_symbol, take_u32, KEY_DATA_TYPES},
    text_options::TextOptions,
    CreateIndexError,
};
use shoal_types::KeyDataType;

pub(crate) const ON: &str = "ON";
pub(crate) const PREFIX: &str = "PREFIX";

/// Options that may appear between the index name and the SCHEMA keyword.
#[derive(Debug, Default)]
pub(crate) struct GlobalOptions {
    pub key_type: Option<KeyDataType>,
    pub prefixes: Option<Vec<String>>,
    pub text: TextOptions,
}

/// Consume global options until a token that is not one. The first unknown
/// token is left in place; whether it is valid is decided by the section that
/// follows.
pub(crate) fn parse_global_options(
    cursor: &mut ArgCursor,
) -> Result<GlobalOptions, CreateIndexError> {
    let mut options = GlobalOptions::default();
    loop {
        let Some(token) = cursor.peek() else {
            break;
        };
        let position = cursor.position();
        if token.eq_ignore_ascii_case(ON) {
            cursor.advance();
            if options.key_type.is_some() {
                return Err(CreateIndexError::duplicate_option(ON, position));
            }
            options.key_type = Some(take_symbol(cursor, ON, KEY_DATA_TYPES)?);
        } else if token.eq_ignore_ascii_case(PREFIX) {
            cursor.advance();
            if options.prefixes.is_some() {
                return Err(CreateIndexError::duplicate_option(PREFIX, position));
            }
            let count = take_u32(cursor, PREFIX, 0, u32::MAX)?;
            let mut prefixes = Vec::new();
            for _ in 0..count {
                prefixes.push(cursor.take_token("PREFIX list")?.to_string());
            }
            options.prefixes = Some(prefixes);
        } else if options.text.try_consume(cursor)? {
            // Consumed a schema-wide text default.
        } else {
            break;
        }
    }
    Ok(options)
}
