//! Node-shaped prisms: the type filters over the closed variant set plus
//! the list-position extractors the beautifier rules are built from.

use crate::ast::{Ident, Node, Value};
use crate::prism::{of_value, Prism};

/// The synthetic receiver name a Groovy list literal converts to.
pub const LIST_OF: &str = "listOf";
/// The synthetic receiver name a Groovy map literal converts to.
pub const MAP_OF: &str = "mapOf";
/// The infix operator used to build key/value pairs, as in `"a" to b`.
pub const PAIR_OPERATOR: &str = "to";

pub fn constant(node: &Node) -> Option<Value> {
    match node {
        Node::Constant(value) => Some(value.clone()),
        _ => None,
    }
}

pub fn string(node: &Node) -> Option<String> {
    match constant(node)? {
        Value::String(text) => Some(text),
        _ => None,
    }
}

pub fn identifier(node: &Node) -> Option<Ident> {
    match node {
        Node::Identifier(ident) => Some(ident.clone()),
        _ => None,
    }
}

pub fn identifier_name(node: &Node) -> Option<String> {
    identifier(node).map(|ident| ident.0)
}

pub fn lambda_body(node: &Node) -> Option<Node> {
    match node {
        Node::Lambda { body } => Some((**body).clone()),
        _ => None,
    }
}

pub fn infix(node: &Node) -> Option<(Ident, Node, Node)> {
    match node {
        Node::Infix { operator, left, right } => {
            Some((operator.clone(), (**left).clone(), (**right).clone()))
        }
        _ => None,
    }
}

/// A key/value pair, i.e. an infix whose operator is [`PAIR_OPERATOR`].
pub fn tuple(node: &Node) -> Option<(Node, Node)> {
    let (operator, left, right) = infix(node)?;
    of_value(PAIR_OPERATOR.to_string()).preview(&operator.0)?;
    Some((left, right))
}

pub fn invocation(node: &Node) -> Option<(Node, Vec<Node>)> {
    match node {
        Node::Invocation { receiver, args } => Some(((**receiver).clone(), args.clone())),
        _ => None,
    }
}

/// The argument list of an invocation whose receiver is the bare
/// identifier `name`.
pub fn invocation_of(name: &'static str) -> impl Fn(&Node) -> Option<Vec<Node>> {
    move |node: &Node| {
        let (receiver, args) = invocation(node)?;
        identifier_name
            .then(of_value(name.to_string()))
            .preview(&receiver)?;
        Some(args)
    }
}

pub fn element(at: usize) -> impl Fn(&Vec<Node>) -> Option<Node> {
    move |nodes: &Vec<Node>| nodes.get(at).cloned()
}

pub fn elements_from(index: usize) -> impl Fn(&Vec<Node>) -> Option<Vec<Node>> {
    move |nodes: &Vec<Node>| Some(nodes.iter().skip(index).cloned().collect())
}

pub fn last(nodes: &Vec<Node>) -> Option<Node> {
    nodes.last().cloned()
}

pub fn all_but_last(nodes: &Vec<Node>) -> Option<Vec<Node>> {
    match nodes.split_last() {
        Some((_, leading)) => Some(leading.to_vec()),
        None => Some(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_of_matches_receiver_name_only() {
        let call = Node::invocation(Node::ident("task"), vec![Node::string("foo")]);
        assert_eq!(invocation_of("task")(&call), Some(vec![Node::string("foo")]));
        assert_eq!(invocation_of("other")(&call), None);

        let dotted = Node::invocation(
            Node::member(Node::ident("tasks"), "create"),
            vec![Node::string("foo")],
        );
        assert_eq!(invocation_of("task")(&dotted), None);
    }

    #[test]
    fn tuple_requires_the_pair_operator() {
        let pair = Node::infix("to", Node::string("k"), Node::ident("v"));
        assert_eq!(
            tuple(&pair),
            Some((Node::string("k"), Node::ident("v")))
        );

        let sum = Node::infix("+", Node::number(1.0), Node::number(2.0));
        assert_eq!(tuple(&sum), None);
    }

    #[test]
    fn list_prisms_are_total_over_short_lists() {
        let nodes = vec![Node::ident("a"), Node::ident("b")];
        assert_eq!(element(1)(&nodes), Some(Node::ident("b")));
        assert_eq!(element(5)(&nodes), None);
        assert_eq!(elements_from(1)(&nodes), Some(vec![Node::ident("b")]));
        assert_eq!(elements_from(5)(&nodes), Some(Vec::new()));
        assert_eq!(last(&nodes), Some(Node::ident("b")));
        assert_eq!(all_but_last(&nodes), Some(vec![Node::ident("a")]));
        assert_eq!(all_but_last(&Vec::new()), Some(Vec::new()));
    }
}
