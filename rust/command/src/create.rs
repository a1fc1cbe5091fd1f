use crate::{
    cursor::ArgCursor, field::parse_field, global::parse_global_options,
    text_options::TextOptions, CreateIndexError,
};
use shoal_error::ShoalValidationError;
use shoal_types::{validate_index_name, IndexSchema};

const SCHEMA: &str = "SCHEMA";

/// Parse an index creation argument vector into a validated [`IndexSchema`].
///
/// `args[0]` is the index name; the rest follows
/// `[ON HASH|JSON] [PREFIX <n> <p>...] [text defaults...] SCHEMA <field>...`.
/// Keywords match ASCII case-insensitively; positions reported in errors are
/// zero-based indices into `args`.
pub fn parse_create_command(args: &[String]) -> Result<IndexSchema, CreateIndexError> {
    let result = schema_from_args(args);
    match &result {
        Ok(schema) => tracing::debug!(
            name = %schema.name,
            fields = schema.fields.len(),
            "Parsed index creation command"
        ),
        Err(err) => tracing::debug!(error = %err, "Rejected index creation command"),
    }
    result
}

fn schema_from_args(args: &[String]) -> Result<IndexSchema, CreateIndexError> {
    let mut cursor = ArgCursor::new(args);
    let name = cursor.take_token("index name")?.to_string();
    validate_index_name(&name).map_err(ShoalValidationError::from)?;

    let globals = parse_global_options(&mut cursor)?;

    let position = cursor.position();
    match cursor.peek() {
        Some(token) if token.eq_ignore_ascii_case(SCHEMA) => cursor.advance(),
        Some(token) => {
            return Err(CreateIndexError::UnknownArgument {
                token: token.to_string(),
                position,
            })
        }
        None => return Err(CreateIndexError::UnexpectedEndOfInput { context: "SCHEMA" }),
    }

    let mut fields = Vec::new();
    while !cursor.done() {
        fields.push(parse_field(&mut cursor, &globals.text)?);
    }

    // The schema records the resolved defaults only when the command declared
    // any; fields above already have them folded in.
    let text_defaults =
        (!globals.text.is_empty()).then(|| globals.text.resolve(&TextOptions::default()));
    Ok(IndexSchema::try_new(
        name,
        globals.key_type.unwrap_or_default(),
        globals.prefixes.unwrap_or_default(),
        text_defaults,
        fields,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoal_types::{FieldIndex, KeyDataType};

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_minimal_command() {
        let schema = parse_create_command(&args(&["idx", "SCHEMA", "price", "NUMERIC"])).unwrap();

        assert_eq!(schema.name, "idx");
        assert_eq!(schema.key_type, KeyDataType::Hash);
        assert!(schema.prefixes.is_empty());
        assert_eq!(schema.text_defaults, None);
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].index, FieldIndex::Numeric);
    }

    #[test]
    fn test_empty_argument_vector() {
        let err = parse_create_command(&[]).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::UnexpectedEndOfInput {
                context: "index name"
            }
        ));
    }

    #[test]
    fn test_empty_index_name() {
        let err = parse_create_command(&args(&["", "SCHEMA", "price", "NUMERIC"])).unwrap_err();

        assert!(matches!(err, CreateIndexError::InvalidIndexName(_)));
    }

    #[test]
    fn test_schema_keyword_is_required() {
        let err = parse_create_command(&args(&["idx", "price", "NUMERIC"])).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::UnknownArgument { token, position: 1 } if token == "price"
        ));

        let err = parse_create_command(&args(&["idx"])).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::UnexpectedEndOfInput { context: "SCHEMA" }
        ));
    }

    #[test]
    fn test_schema_without_fields() {
        let err = parse_create_command(&args(&["idx", "SCHEMA"])).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::Schema(shoal_types::SchemaError::EmptySchema)
        ));
    }
}
