use crate::error::{CompileError, GenerationError, SyntaxError};
use crate::ir::ast::{self, BinaryOperator, Node, UnaryOperator};

use super::Backend;

/// Tree walk with one text template per node variant. Holds no state between calls.
#[derive(Debug, Default)]
pub struct JavaScriptBackend;

impl Backend for JavaScriptBackend {
    fn generate(&mut self, node: &Node) -> Result<String, CompileError> {
        self.generate_node(node)
    }
}

impl JavaScriptBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_program(&self, program: &ast::Program) -> Result<String, CompileError> {
        self.generate_statements(&program.statements)
    }

    fn generate_node(&self, node: &Node) -> Result<String, CompileError> {
        let code = match node {
            Node::Program(program) => self.generate_program(program)?,
            Node::Block(block) => format!("{{{}}}", self.generate_statements(&block.statements)?),
            Node::BinaryExpression {
                left,
                operator,
                right,
            } => format!(
                "{} {} {}",
                self.generate_node(left)?,
                binary_operator(*operator),
                self.generate_node(right)?
            ),
            Node::UnaryExpression { operator, operand } => {
                format!("{}{}", unary_operator(*operator), self.generate_node(operand)?)
            }
            Node::Assignment { target, value } => format!(
                "{} = {}",
                self.generate_node(target)?,
                self.generate_node(value)?
            ),
            Node::Definition { identifier } => {
                let identifier = identifier
                    .as_ref()
                    .ok_or(SyntaxError::MissingIdentifier { after: "def" })?;
                format!("let {}", identifier.name)
            }
            Node::Identifier(identifier) => identifier.name.clone(),
            Node::NumberLiteral(digits) => digits.clone(),
            Node::StringLiteral(contents) => quote(contents),
            Node::BooleanLiteral(value) => value.to_string(),
            Node::Dot { parent, child } => {
                let parent = parent.as_deref().ok_or(GenerationError::MissingChild {
                    node: "Dot",
                    child: "parent",
                })?;
                let child = child
                    .as_ref()
                    .ok_or(SyntaxError::MissingIdentifier { after: "." })?;
                format!("{}.{}", self.generate_node(parent)?, child.name)
            }
            Node::Pipe { left, right } => {
                let argument = match left {
                    Some(left) => self.generate_node(left)?,
                    None => String::new(),
                };
                format!("{}({})", self.generate_node(right)?, argument)
            }
            Node::Judgement { .. } => {
                return Err(GenerationError::UnsupportedNode { kind: node.kind() }.into());
            }
        };
        Ok(code)
    }

    /// Every statement except a block is terminated with `;`.
    fn generate_statements(&self, statements: &[Node]) -> Result<String, CompileError> {
        let mut code = String::new();
        for statement in statements {
            code.push_str(&self.generate_node(statement)?);
            if !matches!(statement, Node::Block(_)) {
                code.push(';');
            }
        }
        Ok(code)
    }
}

fn binary_operator(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Add => "+",
        BinaryOperator::Subtract => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Greater => ">",
        BinaryOperator::Less => "<",
        BinaryOperator::Equal => "===",
        BinaryOperator::Assign => "=",
    }
}

fn unary_operator(operator: UnaryOperator) -> &'static str {
    match operator {
        UnaryOperator::Positive => "+",
        UnaryOperator::Negative => "-",
        UnaryOperator::Not => "!",
    }
}

// source strings have no escapes, so only raw line breaks need care
fn quote(contents: &str) -> String {
    let escaped = contents.replace('\r', "\\r").replace('\n', "\\n");
    format!("\"{escaped}\"")
}
