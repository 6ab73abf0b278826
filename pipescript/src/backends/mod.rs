pub mod javascript;

use crate::error::CompileError;
use crate::ir::ast::Node;

pub trait Backend {
    fn generate(&mut self, node: &Node) -> Result<String, CompileError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    JavaScript,
}

impl BackendType {
    pub fn all() -> Vec<Self> {
        vec![Self::JavaScript]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|b| b.name() == name)
    }

    /// Like `from_name`, but an unknown name is an error.
    pub fn select(name: &str) -> Result<Self, CompileError> {
        Self::from_name(name).ok_or_else(|| CompileError::UnknownTarget {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript source text",
        }
    }

    /// Extension used when the output path is derived from the input path.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
        }
    }

    pub fn create(&self) -> Box<dyn Backend> {
        match self {
            Self::JavaScript => Box::new(javascript::JavaScriptBackend::new()),
        }
    }
}

/// Generates JavaScript for any node, including a whole `Node::Program`.
pub fn generate(node: &Node) -> Result<String, CompileError> {
    javascript::JavaScriptBackend::new().generate(node)
}
