/**
 * Errors produced while parsing a pattern.
 */

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An expected character was missing, or the pattern ended too early (in
    /// which case the offset equals the pattern length). Offsets count chars.
    #[error("unexpected character at offset {offset} in pattern `{pattern}`")]
    UnexpectedCharacter{
        pattern: String,
        offset: usize,
    },

    #[error("{0}")]
    InvalidEscape(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
