//! Groovy-to-Kotlin tree conversion.
//!
//! One exhaustive match over the closed foreign subset. Total over that
//! subset; [`GroovyNode::Unsupported`] fails with the offending kind rather
//! than silently dropping information.

use crate::ast::prisms::{LIST_OF, MAP_OF, PAIR_OPERATOR};
use crate::ast::{pack, Node};
use crate::errors::ConvertError;
use crate::foreign::GroovyNode;

/// Converts a Groovy tree to a Kotlin tree.
pub fn convert(node: &GroovyNode) -> Result<Node, ConvertError> {
    match node {
        GroovyNode::Block(statements) => Ok(pack(convert_all(statements)?)),
        GroovyNode::ExpressionStatement(expression) => convert(expression),
        GroovyNode::MethodCall { method, arguments } => Ok(Node::invocation(
            invocation_receiver_from(method)?,
            convert_all(arguments)?,
        )),
        GroovyNode::Closure { code } => Ok(Node::lambda(convert(code)?)),
        GroovyNode::ListLiteral(elements) => {
            Ok(Node::invocation(Node::ident(LIST_OF), convert_all(elements)?))
        }
        GroovyNode::MapLiteral(entries) => {
            Ok(Node::invocation(Node::ident(MAP_OF), convert_all(entries)?))
        }
        GroovyNode::MapEntry { key, value } => {
            Ok(Node::infix(PAIR_OPERATOR, convert(key)?, convert(value)?))
        }
        GroovyNode::Variable(name) => Ok(Node::ident(name.clone())),
        GroovyNode::Property { object, property } => {
            Ok(Node::member(convert(object)?, property.clone()))
        }
        GroovyNode::Binary { operator, left, right } => {
            Ok(Node::infix(operator.clone(), convert(left)?, convert(right)?))
        }
        GroovyNode::Constant(value) => Ok(Node::Constant(value.clone())),
        GroovyNode::GString { strings, values } => {
            Ok(Node::StringTemplate(string_template_parts_from(strings, values)?))
        }
        GroovyNode::Unsupported { kind } => Err(ConvertError::unsupported_construct(kind)),
    }
}

fn convert_all(nodes: &[GroovyNode]) -> Result<Vec<Node>, ConvertError> {
    nodes.iter().map(convert).collect()
}

// A constant method name becomes a bare identifier receiver; anything else
// (a property chain, say) converts as an expression.
fn invocation_receiver_from(method: &GroovyNode) -> Result<Node, ConvertError> {
    match method {
        GroovyNode::Constant(crate::ast::Value::String(name)) => Ok(Node::ident(name.clone())),
        other => convert(other),
    }
}

// Literal segments and embedded expressions alternate, literals first.
fn string_template_parts_from(
    strings: &[String],
    values: &[GroovyNode],
) -> Result<Vec<Node>, ConvertError> {
    let mut parts = Vec::with_capacity(strings.len() + values.len());
    for (index, text) in strings.iter().enumerate() {
        parts.push(Node::string(text.clone()));
        if let Some(value) = values.get(index) {
            parts.push(convert(value)?);
        }
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use crate::errors::ConvertError;
    use crate::foreign::GroovyNode;

    #[test]
    fn blocks_pack_and_expression_statements_unwrap() {
        let single = GroovyNode::Block(vec![GroovyNode::ExpressionStatement(Box::new(
            GroovyNode::var("x"),
        ))]);
        assert_eq!(convert(&single).unwrap(), Node::ident("x"));

        let several = GroovyNode::Block(vec![GroovyNode::var("a"), GroovyNode::var("b")]);
        assert_eq!(
            convert(&several).unwrap(),
            Node::Block(vec![Node::ident("a"), Node::ident("b")])
        );
    }

    #[test]
    fn map_literals_become_map_of_with_pair_entries() {
        let map = GroovyNode::map(vec![(GroovyNode::string("dependsOn"), GroovyNode::var("compile"))]);
        assert_eq!(
            convert(&map).unwrap(),
            Node::invocation(
                Node::ident("mapOf"),
                vec![Node::infix("to", Node::string("dependsOn"), Node::ident("compile"))],
            )
        );
    }

    #[test]
    fn list_literals_become_list_of() {
        let list = GroovyNode::ListLiteral(vec![GroovyNode::var("a"), GroovyNode::var("b")]);
        assert_eq!(
            convert(&list).unwrap(),
            Node::invocation(Node::ident("listOf"), vec![Node::ident("a"), Node::ident("b")])
        );
    }

    #[test]
    fn method_name_constants_become_identifier_receivers() {
        let call = GroovyNode::call("println", vec![GroovyNode::property(GroovyNode::var("buildFile"), "name")]);
        assert_eq!(
            convert(&call).unwrap(),
            Node::invocation(
                Node::ident("println"),
                vec![Node::member(Node::ident("buildFile"), "name")],
            )
        );
    }

    #[test]
    fn gstring_parts_interleave_literals_and_values() {
        let gstring = GroovyNode::GString {
            strings: vec![String::new(), ", ".into(), "!".into()],
            values: vec![GroovyNode::var("greeting"), GroovyNode::var("thing")],
        };
        assert_eq!(
            convert(&gstring).unwrap(),
            Node::StringTemplate(vec![
                Node::string(""),
                Node::ident("greeting"),
                Node::string(", "),
                Node::ident("thing"),
                Node::string("!"),
            ])
        );
    }

    #[test]
    fn constants_carry_their_values_through() {
        assert_eq!(
            convert(&GroovyNode::Constant(Value::Number(42.0))).unwrap(),
            Node::number(42.0)
        );
        assert_eq!(
            convert(&GroovyNode::Constant(Value::Null)).unwrap(),
            Node::Constant(Value::Null)
        );
    }

    #[test]
    fn unsupported_constructs_are_rejected_by_kind() {
        let foreign = GroovyNode::Block(vec![GroovyNode::unsupported("ForStatement")]);
        match convert(&foreign) {
            Err(ConvertError::UnsupportedConstruct { kind }) => assert_eq!(kind, "ForStatement"),
            other => panic!("expected an unsupported-construct error, got {other:?}"),
        }
    }
}
