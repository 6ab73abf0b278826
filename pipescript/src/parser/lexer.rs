use crate::error::LexicalError;
use crate::span::Span;

use super::token::{KEYWORDS, Operator, Separator, Token, TokenKind};

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexicalError> {
        loop {
            self.skip_trivia()?;
            let Some(ch) = self.peek() else { break };
            let start = self.mark();

            match ch {
                '0'..='9' => self.number(start)?,
                '.' if self.previous_is_identifier() => {
                    self.advance();
                    self.push(TokenKind::Operator, ".", start);
                }
                '.' if self.lookahead(1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.number(start)?
                }
                '"' => self.string(start)?,
                c if is_word_start(c) => self.word(start),
                c if is_symbol(c) => self.symbol(start)?,
                _ => {
                    return Err(LexicalError::UnexpectedCharacter {
                        ch,
                        span: self.span_from(start),
                    });
                }
            }
        }

        let end = self.mark();
        self.tokens.push(Token::eof(self.span_from(end)));
        Ok(self.tokens)
    }

    /// Whitespace, `# line` comments and `#$ block $#` comments.
    fn skip_trivia(&mut self) -> Result<(), LexicalError> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => {
                    self.advance();
                }
                '#' if self.lookahead(1) == Some('$') => {
                    let start = self.mark();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('$') if self.peek() == Some('#') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(LexicalError::UnterminatedComment {
                                    span: self.span_from(start),
                                });
                            }
                        }
                    }
                }
                '#' => {
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn number(&mut self, start: Mark) -> Result<(), LexicalError> {
        let mut text = String::new();
        let mut seen_point = false;
        let mut second_point = false;

        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => {}
                '.' if seen_point => second_point = true,
                '.' => seen_point = true,
                _ => break,
            }
            text.push(ch);
            self.advance();
        }

        if second_point {
            return Err(LexicalError::InvalidNumber {
                text,
                span: self.span_from(start),
            });
        }
        self.push(TokenKind::Number, text, start);
        Ok(())
    }

    fn string(&mut self, start: Mark) -> Result<(), LexicalError> {
        self.advance(); // opening quote
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('"') => break,
                Some(ch) => text.push(ch),
                None => {
                    return Err(LexicalError::UnterminatedString {
                        span: self.span_from(start),
                    });
                }
            }
        }
        self.push(TokenKind::String, text, start);
        Ok(())
    }

    fn word(&mut self, start: Mark) {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if !is_word_continue(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }

        let kind = match word.as_str() {
            "true" | "false" => TokenKind::Boolean,
            w if KEYWORDS.contains(&w) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        };
        self.push(kind, word, start);
    }

    /// Greedy run of symbol characters; a brace always stands alone.
    fn symbol(&mut self, start: Mark) -> Result<(), LexicalError> {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !is_symbol(ch) {
                break;
            }
            if is_brace(ch) {
                if text.is_empty() {
                    text.push(ch);
                    self.advance();
                }
                break;
            }
            text.push(ch);
            self.advance();
        }

        let kind = if Separator::from_symbol(&text).is_some() {
            TokenKind::Separator
        } else if Operator::from_symbol(&text).is_some() {
            TokenKind::Operator
        } else {
            return Err(LexicalError::UnknownSymbol {
                symbol: text,
                span: self.span_from(start),
            });
        };
        self.push(kind, text, start);
        Ok(())
    }

    // helpers
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn lookahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn previous_is_identifier(&self) -> bool {
        matches!(self.tokens.last(), Some(token) if token.kind == TokenKind::Identifier)
    }

    fn mark(&self) -> Mark {
        Mark {
            line: self.line,
            column: self.column,
            position: self.position,
        }
    }

    fn span_from(&self, start: Mark) -> Span {
        Span::new(start.line, start.column, start.position, self.position)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, start: Mark) {
        let span = self.span_from(start);
        self.tokens.push(Token::with_span(kind, text, span));
    }
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    line: usize,
    column: usize,
    position: usize,
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_word_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | ';' | '\'' | '(' | ')' | '[' | ']' | '{' | '}'
            | '.' | ',' | ':' | '!'
    )
}

fn is_brace(ch: char) -> bool {
    ch == '{' || ch == '}'
}
