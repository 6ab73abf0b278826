use serde::Serialize;

use crate::parser::token::Operator;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Node>,
}

/// Body of a `{ ... }` pair, parsed as an independent program.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Block {
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub condition: Node,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Program(Program),
    Block(Block),
    /// 1 + 2, a == b
    BinaryExpression {
        left: Box<Node>,
        operator: BinaryOperator,
        right: Box<Node>,
    },
    /// -a, !flag
    UnaryExpression {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    /// a >> 1
    Assignment {
        target: Box<Node>,
        value: Box<Node>,
    },
    /// def a. The name is attached when the identifier after `def` is read.
    Definition {
        identifier: Option<Identifier>,
    },
    Identifier(Identifier),
    /// Raw digits, at most one decimal point.
    NumberLiteral(String),
    StringLiteral(String),
    BooleanLiteral(bool),
    /// a.b.c, built as Dot(Dot(a, b), c). Parent is an Identifier or a Dot.
    Dot {
        parent: Option<Box<Node>>,
        child: Option<Identifier>,
    },
    /// a -> f calls f(a); a bare `-> f` calls f().
    Pipe {
        left: Option<Box<Node>>,
        right: Box<Node>,
    },
    /// Conditional chain. Reserved: the parser never builds it.
    Judgement {
        branches: Vec<Branch>,
        default: Option<Block>,
    },
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Program(_) => "Program",
            Self::Block(_) => "Block",
            Self::BinaryExpression { .. } => "BinaryExpression",
            Self::UnaryExpression { .. } => "UnaryExpression",
            Self::Assignment { .. } => "Assignment",
            Self::Definition { .. } => "Definition",
            Self::Identifier(_) => "Identifier",
            Self::NumberLiteral(_) => "NumberLiteral",
            Self::StringLiteral(_) => "StringLiteral",
            Self::BooleanLiteral(_) => "BooleanLiteral",
            Self::Dot { .. } => "Dot",
            Self::Pipe { .. } => "Pipe",
            Self::Judgement { .. } => "Judgement",
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Greater,  // >
    Less,     // <
    Equal,    // ==
    Assign,   // >>
}

impl TryFrom<Operator> for BinaryOperator {
    type Error = Operator;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        match op {
            Operator::Plus => Ok(Self::Add),
            Operator::Minus => Ok(Self::Subtract),
            Operator::Multiply => Ok(Self::Multiply),
            Operator::Divide => Ok(Self::Divide),
            Operator::Greater => Ok(Self::Greater),
            Operator::Less => Ok(Self::Less),
            Operator::Equal => Ok(Self::Equal),
            Operator::Assign => Ok(Self::Assign),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    Positive, // +
    Negative, // -
    Not,      // !
}

impl TryFrom<Operator> for UnaryOperator {
    type Error = Operator;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        match op {
            Operator::Plus => Ok(Self::Positive),
            Operator::Minus => Ok(Self::Negative),
            Operator::Not => Ok(Self::Not),
            other => Err(other),
        }
    }
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
            Self::Not => "!",
        }
    }
}
