//! Thin query helpers over `tree_sitter::Node`.
//!
//! `tree_sitter::Node` already exposes `kind()`, byte ranges, `child(i)`, and
//! `child_by_field_name(name) -> Option<Node>`, so there is no separate wrapper type — this
//! module only adds the small descendant-search helpers the walker needs, built on top of
//! `crate::traverse::depth_first`. Field lookups return plain `Option<Node>`, since
//! `tree-sitter`'s Rust bindings already return `None` for absent fields and children.

use tree_sitter::Node;

use crate::traverse::depth_first;

/// Returns the first descendant (including `node` itself) whose `kind()` equals `kind`, in
/// pre-order. Used to locate a declarator's identifier, or a parameter's pointer declarator.
pub fn find_first_descendant_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    if node.kind() == kind {
        return Some(node);
    }
    depth_first(node).find(|n| n.kind() == kind)
}

/// Returns `src[node.start_byte()..node.end_byte()]`, trimmed of surrounding ASCII whitespace.
pub fn node_text<'a>(node: Node, src: &'a str) -> &'a str {
    crate::text::trim(crate::text::slice(src, node.start_byte(), node.end_byte()))
}

/// Extracts the function name from a `function_definition`'s `declarator` field: the first
/// `identifier` descendant of the declarator.
pub fn function_name<'a>(func_def: Node, src: &'a str) -> Option<&'a str> {
    let declarator = func_def.child_by_field_name("declarator")?;
    let ident = find_first_descendant_of_kind(declarator, "identifier")?;
    Some(node_text(ident, src))
}

/// Finds the `parameter_list` nested inside a `function_definition`'s declarator.
pub fn parameter_list(func_def: Node) -> Option<Node> {
    let declarator = func_def.child_by_field_name("declarator")?;
    find_first_descendant_of_kind(declarator, "parameter_list")
}

/// Returns the `parameter_declaration` children of a `parameter_list`, in order.
pub fn parameter_declarations(param_list: Node) -> Vec<Node> {
    let mut cursor = param_list.walk();
    param_list
        .children(&mut cursor)
        .filter(|c| c.kind() == "parameter_declaration")
        .collect()
}

/// Naive pointer check for a parameter declaration: does it contain a `pointer_declarator`
/// descendant, or (as a fallback) does its raw text contain a `*`?
pub fn parameter_is_pointer(param_decl: Node, src: &str) -> bool {
    if find_first_descendant_of_kind(param_decl, "pointer_declarator").is_some() {
        return true;
    }
    node_text(param_decl, src).contains('*')
}

/// Extracts the callee text from a `call_expression`'s `function` field.
pub fn call_callee<'a>(call: Node, src: &'a str) -> Option<&'a str> {
    let func = call.child_by_field_name("function")?;
    let text = node_text(func, src);
    if text.is_empty() { None } else { Some(text) }
}

/// Extracts the raw `(...)` text of a `call_expression`'s `arguments` field.
pub fn call_arguments_text<'a>(call: Node, src: &'a str) -> Option<&'a str> {
    let args = call.child_by_field_name("arguments")?;
    Some(crate::text::slice(src, args.start_byte(), args.end_byte()))
}

/// Splits a parenthesized argument list `"(a, b, c)"` into trimmed argument texts. No nested
/// comma handling is attempted — inputs exercise only flat argument lists.
pub fn split_arguments(paren_args: &str) -> Vec<&str> {
    let inner = paren_args
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(paren_args);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(crate::text::trim).collect()
}
