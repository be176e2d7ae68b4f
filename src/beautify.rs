//! Task-declaration beautification.
//!
//! Recognizes ad-hoc `task(...)` invocations and restructures them into the
//! declarative `val <name> by tasks.creating` delegate-property form. Two
//! shapes are recognized, complex first:
//!
//! 1. `task(mapOf(props), "name", args..., { body }?)` — configuration map,
//!    then the task name, then the remaining arguments. Property entries are
//!    injected as invocations at the head of the trailing closure body,
//!    synthesizing the closure when absent.
//! 2. `task("name", args...)` — no configuration map.
//!
//! An invocation matching neither shape is left untouched.

use crate::ast::prisms::{self, LIST_OF, MAP_OF};
use crate::ast::rewrite::rewrite_bottom_up;
use crate::ast::{pack, Node};
use crate::prism::Prism;
use once_cell::sync::Lazy;

/// The declaration-style function this pass rewrites.
const TASK: &str = "task";

/// `tasks.creating`, the delegate target of every rewritten declaration.
static TASKS_CREATING: Lazy<Node> =
    Lazy::new(|| Node::member(Node::ident("tasks"), "creating"));

/// Applies the task-declaration rules bottom-up over the whole tree.
pub fn beautify(root: &Node) -> Node {
    let rule = prisms::invocation_of(TASK)
        .then(complex_task_delegate().or(simple_task_delegate()));
    rewrite_bottom_up(&rule, root)
}

// `task(mapOf(...), "name", rest...)`.
fn complex_task_delegate() -> impl Prism<Vec<Node>, Out = Node> {
    prisms::element(0)
        .then(prisms::invocation_of(MAP_OF))
        .fan_out(prisms::element(1).then(prisms::string))
        .fan_out(prisms::elements_from(2))
        .map(|((properties, task_name), remaining)| {
            let delegate_args = match split_trailing_lambda(&remaining) {
                Some((original_body, mut leading)) => {
                    leading.push(task_lambda_for(&properties, Some(original_body)));
                    leading
                }
                None => {
                    let mut args = remaining;
                    args.push(task_lambda_for(&properties, None));
                    args
                }
            };
            task_delegate(&task_name, delegate_args)
        })
}

// `task("name", rest...)`.
fn simple_task_delegate() -> impl Prism<Vec<Node>, Out = Node> {
    prisms::element(0)
        .then(prisms::string)
        .fan_out(prisms::elements_from(1))
        .map(|(task_name, args)| task_delegate(&task_name, args))
}

// Splits off a closure in trailing position, yielding its body and the
// leading arguments.
fn split_trailing_lambda(args: &Vec<Node>) -> Option<(Node, Vec<Node>)> {
    prisms::last
        .then(prisms::lambda_body)
        .fan_out(prisms::all_but_last)
        .preview(args)
}

// Builds the configuration closure: one `key(value)` invocation per map
// entry, followed by the original closure body when there is one.
fn task_lambda_for(properties: &[Node], original_body: Option<Node>) -> Node {
    let mut body: Vec<Node> = properties
        .iter()
        .map(|entry| task_property_invocation(entry).unwrap_or_else(|| entry.clone()))
        .collect();
    body.extend(original_body);
    Node::lambda(pack(body))
}

// `"key" to value` becomes `key(value)`; a list-literal value spreads its
// elements as the argument list instead of passing one list argument.
fn task_property_invocation(entry: &Node) -> Option<Node> {
    let (key, value) = prisms::tuple(entry)?;
    let property_name = prisms::string(&key)?;
    let args = prisms::invocation_of(LIST_OF)
        .or(|node: &Node| Some(vec![node.clone()]))
        .preview(&value)?;
    Some(Node::invocation(Node::ident(property_name), args))
}

fn task_delegate(task_name: &str, args: Vec<Node>) -> Node {
    let delegate = if args.is_empty() {
        TASKS_CREATING.clone()
    } else {
        Node::invocation(TASKS_CREATING.clone(), args)
    };
    Node::delegate(task_name, delegate)
}
