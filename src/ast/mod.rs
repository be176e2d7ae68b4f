//! The Kotlin-DSL target tree.
//!
//! A closed set of immutable node variants; every child is owned by its
//! parent, so a tree is acyclic and freely clonable. Rewrites never mutate
//! in place, they always build fresh nodes, which keeps the original tree
//! valid and inspectable after a pass.

pub mod prisms;
pub mod rewrite;

/// A bare name. Kept as its own type so that positions which must stay
/// identifiers (`Member::name`, `Named::name`, `Infix::operator`) are
/// identifiers by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// One Kotlin-DSL node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `<value>`
    Constant(Value),
    /// `"$part0...$partN"`; parts alternate literal text and embedded
    /// expressions.
    StringTemplate(Vec<Node>),
    /// `<name>`
    Identifier(Ident),
    /// `<parent>.<name>`
    Member { parent: Box<Node>, name: Ident },
    /// `<receiver>(<args>)`
    Invocation { receiver: Box<Node>, args: Vec<Node> },
    /// `<name> = <value>`
    Named { name: Ident, value: Box<Node> },
    /// `<left> <operator> <right>`
    Infix { operator: Ident, left: Box<Node>, right: Box<Node> },
    /// `{ <body> }`
    Lambda { body: Box<Node> },
    /// `child0; child1; ... childN;`
    Block(Vec<Node>),
    /// `val <name> by <delegate>`
    Delegate { name: Ident, delegate: Box<Node> },
    /// `this`
    This,
}

impl Node {
    pub fn ident(name: impl Into<String>) -> Node {
        Node::Identifier(Ident::new(name))
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::Constant(Value::String(value.into()))
    }

    pub fn number(value: f64) -> Node {
        Node::Constant(Value::Number(value))
    }

    pub fn member(parent: Node, name: impl Into<String>) -> Node {
        Node::Member {
            parent: Box::new(parent),
            name: Ident::new(name),
        }
    }

    pub fn invocation(receiver: Node, args: Vec<Node>) -> Node {
        Node::Invocation {
            receiver: Box::new(receiver),
            args,
        }
    }

    pub fn infix(operator: impl Into<String>, left: Node, right: Node) -> Node {
        Node::Infix {
            operator: Ident::new(operator),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn lambda(body: Node) -> Node {
        Node::Lambda { body: Box::new(body) }
    }

    pub fn delegate(name: impl Into<String>, delegate: Node) -> Node {
        Node::Delegate {
            name: Ident::new(name),
            delegate: Box::new(delegate),
        }
    }

    /// Returns the variant name, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Node::Constant(_) => "Constant",
            Node::StringTemplate(_) => "StringTemplate",
            Node::Identifier(_) => "Identifier",
            Node::Member { .. } => "Member",
            Node::Invocation { .. } => "Invocation",
            Node::Named { .. } => "Named",
            Node::Infix { .. } => "Infix",
            Node::Lambda { .. } => "Lambda",
            Node::Block(_) => "Block",
            Node::Delegate { .. } => "Delegate",
            Node::This => "This",
        }
    }
}

/// Collapses a one-element sequence to its sole element; everything else
/// becomes a [`Node::Block`] preserving order.
pub fn pack(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        nodes.remove(0)
    } else {
        Node::Block(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_collapses_singleton_to_its_element() {
        let sole = Node::ident("x");
        assert_eq!(pack(vec![sole.clone()]), sole);
    }

    #[test]
    fn pack_preserves_order_in_blocks() {
        let nodes = vec![Node::ident("a"), Node::ident("b"), Node::ident("c")];
        assert_eq!(pack(nodes.clone()), Node::Block(nodes));
    }

    #[test]
    fn pack_of_empty_sequence_is_an_empty_block() {
        assert_eq!(pack(Vec::new()), Node::Block(Vec::new()));
    }
}
