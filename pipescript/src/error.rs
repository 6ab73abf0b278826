use thiserror::Error;

use crate::span::Span;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[error("Unexpected character '{ch}' at {span}")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("Unknown symbol '{symbol}' at {span}")]
    UnknownSymbol { symbol: String, span: Span },

    #[error("Invalid number '{text}' at {span}: more than one decimal point")]
    InvalidNumber { text: String, span: Span },

    #[error("Unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    #[error("Unterminated block comment starting at {span}")]
    UnterminatedComment { span: Span },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Missing '}}' for the '{{' at {span}")]
    MissingClosingBrace { span: Span },

    #[error("Unexpected '}}' at {span}")]
    UnexpectedClosingBrace { span: Span },

    #[error("Missing operand for '{operator}' at {span}")]
    MissingOperand { operator: String, span: Span },

    #[error("Unexpected token '{text}' at {span}")]
    UnexpectedToken { text: String, span: Span },

    #[error("Unexpected end-of-file marker at {span}")]
    UnexpectedEndOfFile { span: Span },

    /// Raised by the generator: attachment after `def` and `.` is optional while parsing.
    #[error("Missing identifier after '{after}'")]
    MissingIdentifier { after: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Unsupported node '{kind}'")]
    UnsupportedNode { kind: &'static str },

    #[error("Node '{node}' is missing its {child}")]
    MissingChild {
        node: &'static str,
        child: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Unknown target: {name}")]
    UnknownTarget { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}
