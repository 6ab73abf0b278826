use serde::Serialize;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Number,
    String,
    Boolean,
    Identifier,
    Keyword,
    Operator,
    Separator,
    EndOfFile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme; quotes are stripped for strings and it is empty for `EndOfFile`.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::with_span(kind, text, Span::default())
    }

    pub fn with_span(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::with_span(TokenKind::EndOfFile, "", span)
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => Operator::from_symbol(&self.text),
            _ => None,
        }
    }

    pub fn separator(&self) -> Option<Separator> {
        match self.kind {
            TokenKind::Separator => Separator::from_symbol(&self.text),
            _ => None,
        }
    }

    /// Literal and identifier tokens end an operand, so a following `+`/`-` is binary.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number | TokenKind::String | TokenKind::Boolean | TokenKind::Identifier
        )
    }
}

pub const DEFINITION_KEYWORD: &str = "def";
pub const KEYWORDS: &[&str] = &[DEFINITION_KEYWORD];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Greater,  // >
    Less,     // <
    Equal,    // ==
    Assign,   // >>
    Pipe,     // ->
    Dot,      // .
    Not,      // !
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            ">" => Self::Greater,
            "<" => Self::Less,
            "==" => Self::Equal,
            ">>" => Self::Assign,
            "->" => Self::Pipe,
            "." => Self::Dot,
            "!" => Self::Not,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
            Self::Assign => ">>",
            Self::Pipe => "->",
            Self::Dot => ".",
            Self::Not => "!",
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Not)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Multiply
                | Self::Divide
                | Self::Greater
                | Self::Less
                | Self::Equal
                | Self::Assign
        )
    }

    /// Binding strength on the operator stack, lower binds looser.
    ///
    /// Relational operators bind tighter than arithmetic ones: `1 + 2 > 3`
    /// groups as `1 + (2 > 3)`. Pipe sits above everything so any binary
    /// operator that follows reduces it first.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Self::Assign => Some(1),
            Self::Equal => Some(2),
            Self::Plus | Self::Minus => Some(3),
            Self::Multiply | Self::Divide => Some(4),
            Self::Greater | Self::Less => Some(5),
            Self::Pipe => Some(6),
            Self::Dot | Self::Not => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Separator {
    Comma,      // ,
    Colon,      // :
    Semicolon,  // ;
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }
}

impl Separator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let sep = match symbol {
            "," => Self::Comma,
            ":" => Self::Colon,
            ";" => Self::Semicolon,
            "(" => Self::LParen,
            ")" => Self::RParen,
            "{" => Self::LBrace,
            "}" => Self::RBrace,
            _ => return None,
        };
        Some(sep)
    }
}
