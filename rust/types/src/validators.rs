use validator::ValidationError;

pub const MAX_INDEX_NAME_LENGTH: usize = 512;

/// Index names are arbitrary key material, so anything non-empty within the
/// length limit is accepted.
pub fn validate_index_name(name: impl AsRef<str>) -> Result<(), ValidationError> {
    let name_str = name.as_ref();

    if name_str.is_empty() {
        return Err(ValidationError::new("index_name")
            .with_message("Expected a non-empty index name".into()));
    }
    if name_str.len() > MAX_INDEX_NAME_LENGTH {
        return Err(ValidationError::new("index_name").with_message(
            format!(
                "Expected an index name of at most {MAX_INDEX_NAME_LENGTH} bytes. Got: {}",
                name_str.len()
            )
            .into(),
        ));
    }
    Ok(())
}
