//! Multi-line input accumulation
//!
//! Decides whether the text typed so far is ready to run. A buffer with
//! unclosed brackets, or one ending in `:` or a line continuation, waits for
//! more lines; anything that fails to lex or parse is reported right away.

use super::lexer::Lexer;
use super::parser::Parser;

/// Outcome of classifying the input buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferStatus {
    Complete,
    Incomplete,
    Error(String),
}

/// Classify `buffer`; with `force_submit` an incomplete buffer is an error
pub fn classify_buffer(buffer: &str, force_submit: bool) -> BufferStatus {
    if buffer.trim().is_empty() {
        return BufferStatus::Incomplete;
    }
    let status = classify_source(buffer);
    if status == BufferStatus::Incomplete && force_submit {
        return BufferStatus::Error("Incomplete code".to_string());
    }
    status
}

fn classify_source(buffer: &str) -> BufferStatus {
    let trimmed = buffer.trim_end();
    if trimmed.ends_with('\\') || trimmed.ends_with(':') {
        return BufferStatus::Incomplete;
    }

    let mut lexer = Lexer::new(buffer);
    if let Err(err) = lexer.tokenize() {
        return BufferStatus::Error(err.to_string());
    }
    if lexer.unclosed_brackets() > 0 {
        return BufferStatus::Incomplete;
    }

    match Parser::new(buffer).and_then(|mut parser| parser.parse_program()) {
        Ok(_) => BufferStatus::Complete,
        Err(err) => BufferStatus::Error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_statements() {
        assert_eq!(classify_buffer("x = 1", false), BufferStatus::Complete);
        assert_eq!(classify_buffer("s = Stack([1,\n2])", false), BufferStatus::Complete);
    }

    #[test]
    fn test_incomplete_buffers() {
        assert_eq!(classify_buffer("", false), BufferStatus::Incomplete);
        assert_eq!(classify_buffer("arr = [1, 2,", false), BufferStatus::Incomplete);
        assert_eq!(classify_buffer("class Node(value):", false), BufferStatus::Incomplete);
        assert_eq!(classify_buffer("x = 1 + \\", false), BufferStatus::Incomplete);
    }

    #[test]
    fn test_forced_incomplete_is_error() {
        assert_eq!(
            classify_buffer("f(1,", true),
            BufferStatus::Error("Incomplete code".to_string())
        );
        assert_eq!(classify_buffer("   ", true), BufferStatus::Incomplete);
    }

    #[test]
    fn test_errors_reported_immediately() {
        assert_eq!(
            classify_buffer("x = 1)", false),
            BufferStatus::Error("Lexer error at line 1, column 6: Unmatched ')'".to_string())
        );
        assert!(matches!(classify_buffer("x = = 2", false), BufferStatus::Error(_)));
    }
}
