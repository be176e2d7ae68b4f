//! Generic bottom-up tree rewriting.
//!
//! A rewrite rule is a prism from [`Node`] to [`Node`]: matching produces a
//! replacement, not matching keeps the original node in place. Children are
//! rewritten before their parents, and the rule runs once more on each
//! freshly rebuilt node, so a rule can match both the original shape and any
//! shape it produces at a deeper level.

use crate::ast::{Ident, Node};
use crate::prism::Prism;

/// Applies `rule` to every node of `root`, innermost first, and returns the
/// rewritten tree. `root` itself is left untouched.
pub fn rewrite_bottom_up<R>(rule: &R, root: &Node) -> Node
where
    R: Prism<Node, Out = Node>,
{
    let rebuilt = match root {
        Node::Block(children) => Node::Block(rewrite_all(rule, children)),
        Node::Delegate { name, delegate } => Node::Delegate {
            name: rewrite_ident(rule, name),
            delegate: Box::new(rewrite_bottom_up(rule, delegate)),
        },
        Node::Member { parent, name } => Node::Member {
            parent: Box::new(rewrite_bottom_up(rule, parent)),
            name: rewrite_ident(rule, name),
        },
        Node::Invocation { receiver, args } => Node::Invocation {
            receiver: Box::new(rewrite_bottom_up(rule, receiver)),
            args: rewrite_all(rule, args),
        },
        Node::Lambda { body } => Node::Lambda {
            body: Box::new(rewrite_bottom_up(rule, body)),
        },
        Node::Named { name, value } => Node::Named {
            name: rewrite_ident(rule, name),
            value: Box::new(rewrite_bottom_up(rule, value)),
        },
        Node::Infix { operator, left, right } => Node::Infix {
            operator: rewrite_ident(rule, operator),
            left: Box::new(rewrite_bottom_up(rule, left)),
            right: Box::new(rewrite_bottom_up(rule, right)),
        },
        Node::StringTemplate(parts) => Node::StringTemplate(rewrite_all(rule, parts)),
        Node::Identifier(_) | Node::Constant(_) | Node::This => root.clone(),
    };
    rule.preview(&rebuilt).unwrap_or(rebuilt)
}

fn rewrite_all<R>(rule: &R, nodes: &[Node]) -> Vec<Node>
where
    R: Prism<Node, Out = Node>,
{
    nodes
        .iter()
        .map(|node| rewrite_bottom_up(rule, node))
        .collect()
}

// Name positions must stay identifiers. A rule producing anything else for
// such a position is silently ignored, keeping the tree well formed.
fn rewrite_ident<R>(rule: &R, ident: &Ident) -> Ident
where
    R: Prism<Node, Out = Node>,
{
    match rule.preview(&Node::Identifier(ident.clone())) {
        Some(Node::Identifier(replacement)) => replacement,
        _ => ident.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::prisms;

    // Renames every identifier `old` to `new`.
    fn rename(old: &'static str, new: &'static str) -> impl Fn(&Node) -> Option<Node> {
        move |node: &Node| match prisms::identifier_name(node)? {
            name if name == old => Some(Node::ident(new)),
            _ => None,
        }
    }

    #[test]
    fn rule_runs_again_on_freshly_rebuilt_nodes() {
        // `collapse` only matches `f(b)`, a shape that exists solely after
        // the rename has rewritten the child; a single pass must still
        // collapse `f(a)` all the way down to `b`.
        let collapse = |node: &Node| match node {
            Node::Invocation { receiver, args }
                if **receiver == Node::ident("f")
                    && args.len() == 1
                    && args[0] == Node::ident("b") =>
            {
                Some(Node::ident("b"))
            }
            _ => None,
        };
        let rule = rename("a", "b").or(collapse);
        let tree = Node::invocation(Node::ident("f"), vec![Node::ident("a")]);
        assert_eq!(rewrite_bottom_up(&rule, &tree), Node::ident("b"));
    }

    #[test]
    fn unmatched_nodes_are_kept_unchanged() {
        let tree = Node::Block(vec![
            Node::string("s"),
            Node::infix("+", Node::number(1.0), Node::ident("x")),
            Node::lambda(Node::Block(Vec::new())),
        ]);
        let rule = rename("absent", "never");
        assert_eq!(rewrite_bottom_up(&rule, &tree), tree);
    }

    #[test]
    fn rewrite_reaches_identifier_name_positions() {
        let tree = Node::member(Node::ident("outer"), "inner");
        let rewritten = rewrite_bottom_up(&rename("inner", "renamed"), &tree);
        assert_eq!(rewritten, Node::member(Node::ident("outer"), "renamed"));
    }

    #[test]
    fn non_identifier_replacement_for_a_name_position_is_ignored() {
        // The rule would replace the identifier with a string constant; in a
        // name position that replacement is dropped, not an error.
        let to_string = |node: &Node| {
            prisms::identifier_name(node).map(Node::string)
        };
        let tree = Node::member(Node::ident("parent"), "name");
        let rewritten = rewrite_bottom_up(&to_string, &tree);
        assert_eq!(
            rewritten,
            Node::member(Node::string("parent"), "name"),
            "the general parent position converts, the name position stays"
        );
    }

    #[test]
    fn locality_of_variant_specific_rules() {
        let untouched = Node::Block(vec![
            Node::invocation(Node::ident("g"), vec![Node::ident("a"), Node::ident("b")]),
            Node::StringTemplate(vec![Node::string("t"), Node::ident("v")]),
        ]);
        let rule = |node: &Node| match node {
            Node::Delegate { .. } => Some(Node::This),
            _ => None,
        };
        assert_eq!(rewrite_bottom_up(&rule, &untouched), untouched);
    }
}
