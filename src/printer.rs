//! Kotlin source rendering.
//!
//! A single cursor over an accumulating buffer plus the current indent
//! width; both are private to one print invocation. Printing is total only
//! over the variants reachable after beautification; anything else fails
//! with the variant name, and the buffer is discarded with the error.

use crate::ast::{Node, Value};
use crate::errors::ConvertError;

const INDENT_STEP: usize = 4;

/// Renders a Kotlin tree to source text.
pub fn pretty_print(root: &Node) -> Result<String, ConvertError> {
    let mut printer = PrettyPrinter::default();
    printer.print(root)?;
    Ok(printer.out)
}

#[derive(Default)]
struct PrettyPrinter {
    out: String,
    margin: usize,
}

impl PrettyPrinter {
    fn print(&mut self, node: &Node) -> Result<(), ConvertError> {
        match node {
            Node::Member { parent, name } => {
                self.print(parent)?;
                self.push(".");
                self.push(&name.0);
            }
            Node::Invocation { receiver, args } => {
                self.print(receiver)?;
                match args.split_last() {
                    Some((trailing @ Node::Lambda { .. }, leading)) => {
                        if !leading.is_empty() {
                            self.push("(");
                            self.print_separated(leading)?;
                            self.push(")");
                        }
                        self.push(" ");
                        self.print(trailing)?;
                    }
                    _ => {
                        self.push("(");
                        self.print_separated(args)?;
                        self.push(")");
                    }
                }
            }
            Node::Delegate { name, delegate } => {
                self.push("val ");
                self.push(&name.0);
                self.push(" by ");
                self.print(delegate)?;
            }
            Node::Infix { operator, left, right } => {
                self.print(left)?;
                self.push(" ");
                self.push(&operator.0);
                self.push(" ");
                self.print(right)?;
            }
            Node::Identifier(ident) => {
                self.push(&ident.0);
            }
            Node::Constant(value) => {
                self.print_constant(value);
            }
            Node::Lambda { body } => {
                self.push("{");
                self.indented(body)?;
                self.push("}");
            }
            Node::Block(children) => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        self.new_line();
                    }
                    self.print(child)?;
                }
            }
            Node::StringTemplate(parts) => {
                self.push("\"");
                for part in parts {
                    self.print_template_part(part)?;
                }
                self.push("\"");
            }
            Node::Named { .. } | Node::This => {
                return Err(ConvertError::unsupported_node(node.kind()));
            }
        }
        Ok(())
    }

    fn print_constant(&mut self, value: &Value) {
        match value {
            Value::String(text) => {
                self.push("\"");
                self.push(text);
                self.push("\"");
            }
            Value::Number(number) => self.push(&number.to_string()),
            Value::Bool(flag) => self.push(&flag.to_string()),
            Value::Null => self.push("null"),
        }
    }

    // Literal text verbatim, a bare identifier as `$name`, anything else in
    // the `${...}` form.
    fn print_template_part(&mut self, part: &Node) -> Result<(), ConvertError> {
        match part {
            Node::Constant(Value::String(text)) => self.push(text),
            Node::Identifier(ident) => {
                self.push("$");
                self.push(&ident.0);
            }
            embedded => {
                self.push("${");
                self.print(embedded)?;
                self.push("}");
            }
        }
        Ok(())
    }

    fn print_separated(&mut self, nodes: &[Node]) -> Result<(), ConvertError> {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.print(node)?;
        }
        Ok(())
    }

    fn indented(&mut self, body: &Node) -> Result<(), ConvertError> {
        if matches!(body, Node::Block(children) if children.is_empty()) {
            self.new_line();
        } else {
            self.margin += INDENT_STEP;
            self.new_line();
            self.print(body)?;
            self.margin -= INDENT_STEP;
            self.new_line();
        }
        Ok(())
    }

    fn new_line(&mut self) {
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.margin));
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }
}
