//! pipescript compiles a small expression/statement language to JavaScript.
//!
//! ```text
//! Source → tokenize → Tokens → parse_tokens → Program → generate → JavaScript
//! ```
//!
//! The language has `def` definitions, `>>` assignment, `->` pipes
//! (`a -> f` is `f(a)`), `.` member access, `{ }` blocks and `#` / `#$ $#`
//! comments. Every stage fails fast with a typed error; nothing is recovered.

pub mod backends;
pub mod error;
pub mod ir;
pub mod parser;
pub mod span;

pub use backends::generate;
pub use error::{CompileError, GenerationError, LexicalError, SyntaxError};
pub use ir::ast::{Node, Program};
pub use parser::lexer::tokenize;
pub use parser::parser::parse_tokens;
pub use parser::token::{Token, TokenKind};

/// Runs the whole pipeline on `source` and returns the generated JavaScript.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = parser::parse(source)?;
    backends::javascript::JavaScriptBackend::new().generate_program(&program)
}
