use crate::CreateIndexError;

/// A cursor over the flat argument vector of a command. Tokens are consumed
/// strictly left to right; `position` reports the index of the next
/// unconsumed token so errors can point at the offending argument.
#[derive(Debug)]
pub(crate) struct ArgCursor<'a> {
    args: &'a [String],
    pos: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    pub fn done(&self) -> bool {
        self.pos >= self.args.len()
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.args.get(self.pos).map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the next token, failing with `UnexpectedEndOfInput` when the
    /// vector is exhausted mid-structure.
    pub fn take_token(&mut self, context: &'static str) -> Result<&'a str, CreateIndexError> {
        match self.args.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(CreateIndexError::UnexpectedEndOfInput { context }),
        }
    }

    /// Consume the token holding the value of `keyword`, failing with
    /// `MissingRequiredValue` when the keyword was the last token.
    pub fn take_value(&mut self, keyword: &str) -> Result<&'a str, CreateIndexError> {
        match self.args.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(CreateIndexError::MissingRequiredValue {
                keyword: keyword.to_string(),
                position: self.pos,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_cursor_walks_tokens_in_order() {
        let args = args(&["ON", "HASH", "SCHEMA"]);
        let mut cursor = ArgCursor::new(&args);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.peek(), Some("ON"));
        assert_eq!(cursor.peek(), Some("ON"));

        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.take_value("ON").unwrap(), "HASH");
        assert_eq!(cursor.take_token("SCHEMA").unwrap(), "SCHEMA");
        assert!(cursor.done());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_take_value_reports_missing_value() {
        let args = args(&["PREFIX"]);
        let mut cursor = ArgCursor::new(&args);
        cursor.advance();

        let err = cursor.take_value("PREFIX").unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::MissingRequiredValue { keyword, position: 1 } if keyword == "PREFIX"
        ));
    }

    #[test]
    fn test_take_token_reports_end_of_input() {
        let args = args(&[]);
        let mut cursor = ArgCursor::new(&args);

        let err = cursor.take_token("index name").unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::UnexpectedEndOfInput {
                context: "index name"
            }
        ));
    }
}
