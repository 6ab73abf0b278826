use crate::error::SyntaxError;
use crate::ir::ast::{self, BinaryOperator, Block, Identifier, Node, UnaryOperator};
use crate::span::Span;

use super::token::{DEFINITION_KEYWORD, Operator, Separator, Token, TokenKind};

/// Builds a program from a token sequence. A trailing `EndOfFile` token is ignored.
pub fn parse_tokens(tokens: &[Token]) -> Result<ast::Program, SyntaxError> {
    Parser::new(tokens).parse_program()
}

/// Single pass over the tokens with three scratch stacks:
/// operands, pending binary/pipe operators and deferred prefix operators.
/// Nested blocks are parsed by a fresh `Parser` over their own token slice.
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    operands: Vec<Node>,
    operators: Vec<(Operator, Span)>,
    unary: Vec<(UnaryOperator, Span)>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            operands: Vec::new(),
            operators: Vec::new(),
            unary: Vec::new(),
        }
    }

    fn parse_program(mut self) -> Result<ast::Program, SyntaxError> {
        let tokens = self.tokens;

        while let Some(token) = tokens.get(self.position) {
            match token.kind {
                TokenKind::Number => self.operands.push(Node::NumberLiteral(token.text.clone())),
                TokenKind::String => self.operands.push(Node::StringLiteral(token.text.clone())),
                TokenKind::Boolean => {
                    let value = match token.text.as_str() {
                        "true" => true,
                        "false" => false,
                        _ => return Err(unexpected(token)),
                    };
                    self.operands.push(Node::BooleanLiteral(value));
                }
                TokenKind::Identifier => self.parse_identifier(token),
                TokenKind::Keyword => {
                    if token.text != DEFINITION_KEYWORD {
                        return Err(unexpected(token));
                    }
                    self.operands.push(Node::Definition { identifier: None });
                }
                TokenKind::Operator => self.parse_operator(token)?,
                TokenKind::Separator => self.parse_separator(token)?,
                TokenKind::EndOfFile => {
                    if self.position + 1 != tokens.len() {
                        return Err(SyntaxError::UnexpectedEndOfFile { span: token.span });
                    }
                }
            }
            self.position += 1;
        }

        self.flush()?;
        Ok(ast::Program {
            statements: self.operands,
        })
    }

    fn parse_identifier(&mut self, token: &Token) {
        let identifier = Identifier::new(token.text.as_str());

        match self.current_mut() {
            Some(Node::Definition { identifier: slot @ None }) => *slot = Some(identifier),
            Some(Node::Dot { child: slot @ None, .. }) => *slot = Some(identifier),
            _ => self.operands.push(Node::Identifier(identifier)),
        }
    }

    fn parse_operator(&mut self, token: &Token) -> Result<(), SyntaxError> {
        let operator = token.operator().ok_or_else(|| unexpected(token))?;
        let after_operand = self
            .position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(Token::ends_operand);

        if let (false, Ok(unary)) = (after_operand, UnaryOperator::try_from(operator)) {
            self.unary.push((unary, token.span));
        } else if operator.is_binary() {
            self.parse_binary(operator, token.span)?;
        } else if operator == Operator::Dot {
            self.parse_dot()?;
        } else if operator == Operator::Pipe {
            self.flush()?;
            self.operators.push((operator, token.span));
        } else {
            self.flush()?;
        }
        Ok(())
    }

    /// Reduces every pending operator that binds at least as tightly, then waits
    /// for the right operand.
    fn parse_binary(&mut self, operator: Operator, span: Span) -> Result<(), SyntaxError> {
        self.apply_unary()?;

        while let Some(&(top, top_span)) = self.operators.last() {
            if top.precedence() < operator.precedence() {
                break;
            }
            self.operators.pop();
            self.reduce(top, top_span)?;
        }

        self.operators.push((operator, span));
        Ok(())
    }

    /// Member access chains eagerly: `a.b.c` never goes through the operator stack.
    fn parse_dot(&mut self) -> Result<(), SyntaxError> {
        let parent = match self.current() {
            Some(Node::Identifier(_) | Node::Dot { .. }) => self.pop_operand().map(Box::new),
            _ => {
                self.flush()?;
                None
            }
        };

        self.operands.push(Node::Dot {
            parent,
            child: None,
        });
        Ok(())
    }

    fn parse_separator(&mut self, token: &Token) -> Result<(), SyntaxError> {
        let separator = token.separator().ok_or_else(|| unexpected(token))?;

        match separator {
            // completed statements stay on the operand stack until the end
            Separator::Semicolon => self.flush()?,
            Separator::LBrace => self.parse_block(token.span)?,
            Separator::RBrace => {
                return Err(SyntaxError::UnexpectedClosingBrace { span: token.span });
            }
            Separator::Comma | Separator::Colon | Separator::LParen | Separator::RParen => {}
        }
        Ok(())
    }

    /// Finds the matching `}` and parses everything in between as its own program.
    fn parse_block(&mut self, open: Span) -> Result<(), SyntaxError> {
        let tokens = self.tokens;
        let body_start = self.position + 1;
        let mut depth = 1usize;
        let mut body_end = None;

        for (offset, token) in tokens[body_start..].iter().enumerate() {
            match token.separator() {
                Some(Separator::LBrace) => depth += 1,
                Some(Separator::RBrace) => {
                    depth -= 1;
                    if depth == 0 {
                        body_end = Some(body_start + offset);
                        break;
                    }
                }
                _ => {}
            }
        }

        let body_end = body_end.ok_or(SyntaxError::MissingClosingBrace { span: open })?;
        let body = Parser::new(&tokens[body_start..body_end]).parse_program()?;

        self.operands.push(Node::Block(Block {
            statements: body.statements,
        }));
        // the main loop steps past the closing brace
        self.position = body_end;
        Ok(())
    }

    /// Drains deferred prefix operators, then reduces the whole operator stack.
    fn flush(&mut self) -> Result<(), SyntaxError> {
        self.apply_unary()?;
        while let Some((operator, span)) = self.operators.pop() {
            self.reduce(operator, span)?;
        }
        Ok(())
    }

    fn apply_unary(&mut self) -> Result<(), SyntaxError> {
        while let Some((operator, span)) = self.unary.pop() {
            let operand = self.pop_operand().ok_or(SyntaxError::MissingOperand {
                operator: operator.symbol().to_string(),
                span,
            })?;
            self.operands.push(Node::UnaryExpression {
                operator,
                operand: Box::new(operand),
            });
        }
        Ok(())
    }

    fn reduce(&mut self, operator: Operator, span: Span) -> Result<(), SyntaxError> {
        let missing = move || SyntaxError::MissingOperand {
            operator: operator.symbol().to_string(),
            span,
        };

        let right = Box::new(self.pop_operand().ok_or_else(missing)?);
        let node = match operator {
            Operator::Pipe => Node::Pipe {
                left: self.pop_operand().map(Box::new),
                right,
            },
            Operator::Assign => Node::Assignment {
                target: Box::new(self.pop_operand().ok_or_else(missing)?),
                value: right,
            },
            other => {
                let operator = BinaryOperator::try_from(other).map_err(|op| {
                    SyntaxError::UnexpectedToken {
                        text: op.symbol().to_string(),
                        span,
                    }
                })?;
                Node::BinaryExpression {
                    left: Box::new(self.pop_operand().ok_or_else(missing)?),
                    operator,
                    right,
                }
            }
        };

        self.operands.push(node);
        Ok(())
    }

    // helpers
    fn current(&self) -> Option<&Node> {
        self.operands.last()
    }

    fn current_mut(&mut self) -> Option<&mut Node> {
        self.operands.last_mut()
    }

    fn pop_operand(&mut self) -> Option<Node> {
        self.operands.pop()
    }
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        text: token.text.clone(),
        span: token.span,
    }
}
