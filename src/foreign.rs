//! The Groovy side of the boundary.
//!
//! The front end proper (lexing, parsing, canonicalization) lives outside
//! this crate, behind [`Frontend`]. What crosses the boundary is
//! [`GroovyNode`]: a closed tagged tree covering exactly the statement and
//! expression kinds the converter models. Anything else arrives as
//! [`GroovyNode::Unsupported`] carrying its kind name, which the converter
//! rejects loudly instead of approximating.

use crate::ast::Value;
use crate::errors::ConvertError;

/// The supported subset of the Groovy statement/expression taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub enum GroovyNode {
    /// A statement block; order is significant.
    Block(Vec<GroovyNode>),
    /// A statement that is just an expression.
    ExpressionStatement(Box<GroovyNode>),
    /// A call; `method` is usually a constant holding the method name.
    MethodCall {
        method: Box<GroovyNode>,
        arguments: Vec<GroovyNode>,
    },
    /// `{ ... }`
    Closure { code: Box<GroovyNode> },
    /// `[a, b, c]`
    ListLiteral(Vec<GroovyNode>),
    /// `[k: v, ...]`; children are [`GroovyNode::MapEntry`].
    MapLiteral(Vec<GroovyNode>),
    MapEntry {
        key: Box<GroovyNode>,
        value: Box<GroovyNode>,
    },
    /// A bare name reference.
    Variable(String),
    /// `object.property`
    Property {
        object: Box<GroovyNode>,
        property: String,
    },
    /// `left <operator> right`
    Binary {
        operator: String,
        left: Box<GroovyNode>,
        right: Box<GroovyNode>,
    },
    Constant(Value),
    /// `"...${...}..."`; `strings` holds the literal segments, `values` the
    /// embedded expressions between them.
    GString {
        strings: Vec<String>,
        values: Vec<GroovyNode>,
    },
    /// Any foreign node kind outside the supported taxonomy. The front end
    /// names the kind; conversion fails with it.
    Unsupported { kind: String },
}

impl GroovyNode {
    /// A call through a plain method name, the common case.
    pub fn call(method: impl Into<String>, arguments: Vec<GroovyNode>) -> GroovyNode {
        GroovyNode::MethodCall {
            method: Box::new(GroovyNode::string(method)),
            arguments,
        }
    }

    pub fn closure(statements: Vec<GroovyNode>) -> GroovyNode {
        GroovyNode::Closure {
            code: Box::new(GroovyNode::Block(statements)),
        }
    }

    pub fn map(entries: Vec<(GroovyNode, GroovyNode)>) -> GroovyNode {
        GroovyNode::MapLiteral(
            entries
                .into_iter()
                .map(|(key, value)| GroovyNode::MapEntry {
                    key: Box::new(key),
                    value: Box::new(value),
                })
                .collect(),
        )
    }

    pub fn var(name: impl Into<String>) -> GroovyNode {
        GroovyNode::Variable(name.into())
    }

    pub fn property(object: GroovyNode, property: impl Into<String>) -> GroovyNode {
        GroovyNode::Property {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn binary(operator: impl Into<String>, left: GroovyNode, right: GroovyNode) -> GroovyNode {
        GroovyNode::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn string(value: impl Into<String>) -> GroovyNode {
        GroovyNode::Constant(Value::String(value.into()))
    }

    pub fn unsupported(kind: impl Into<String>) -> GroovyNode {
        GroovyNode::Unsupported { kind: kind.into() }
    }
}

/// The external Groovy front end, specified at its boundary only: it turns
/// source text into the supported statement tree or fails with a parse
/// error that the pipeline surfaces as-is.
pub trait Frontend {
    fn parse(&self, source: &str) -> Result<GroovyNode, ConvertError>;
}
