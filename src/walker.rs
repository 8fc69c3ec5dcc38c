//! A single descent over the parsed tree, dispatching on node kind and driving the classifier,
//! alias tracker, and function frames, then handing finished frames to the recurrence
//! synthesizer.
//!
//! A stack of frames is kept (`Vec<FunctionFrame>`) even though C forbids nested function
//! definitions — only the top frame is ever active, but a stack generalizes without changing
//! behavior for C input.

use tree_sitter::Node;

use crate::classify::classify;
use crate::frame::FunctionFrame;
use crate::model::{FunctionRecord, LoopEntry, LoopKind, RecurrenceEntry};
use crate::node;
use crate::recurrence::synthesize;

#[derive(Debug, Default)]
pub struct WalkOutput {
    pub loops: Vec<LoopEntry>,
    pub calls: Vec<String>,
    pub functions: Vec<FunctionRecord>,
    pub recurrences: Vec<RecurrenceEntry>,
}

struct Walker<'a> {
    src: &'a str,
    frames: Vec<FunctionFrame>,
    /// Loop-nesting depth outside of any function frame. Only relevant for syntactically
    /// unusual (non-function-scoped) loops; C itself never reaches this path at the top level.
    top_level_loop_depth: u32,
    out: WalkOutput,
}

impl<'a> Walker<'a> {
    fn new(src: &'a str) -> Self {
        Walker { src, frames: Vec::new(), top_level_loop_depth: 0, out: WalkOutput::default() }
    }

    fn current_frame_mut(&mut self) -> Option<&mut FunctionFrame> {
        self.frames.last_mut()
    }

    fn visit(&mut self, n: Node) {
        match n.kind() {
            "function_definition" => self.visit_function_definition(n),
            "for_statement" | "while_statement" => self.visit_loop(n),
            "assignment_expression" | "init_declarator" => {
                self.maybe_record_alias(n);
                self.visit_children(n);
            }
            "call_expression" => self.visit_call(n),
            _ => self.visit_children(n),
        }
    }

    fn visit_children(&mut self, n: Node) {
        let mut cursor = n.walk();
        for child in n.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn visit_function_definition(&mut self, n: Node) {
        let name = node::function_name(n, self.src).map(str::to_string);
        let mut frame = FunctionFrame::new(name);

        if let Some(param_list) = node::parameter_list(n) {
            choose_size_param(param_list, self.src, &mut frame);
        }

        self.frames.push(frame);
        self.visit_children(n);

        let frame = self.frames.pop().expect("pushed immediately above");
        let (record, entry) = synthesize(frame);
        self.out.functions.push(record);
        if let Some(entry) = entry {
            self.out.recurrences.push(entry);
        }
    }

    fn visit_loop(&mut self, n: Node) {
        let kind = if n.kind() == "for_statement" { LoopKind::For } else { LoopKind::While };

        let depth = match self.current_frame_mut() {
            Some(frame) => {
                frame.enter_loop();
                frame.loop_depth
            }
            None => {
                self.top_level_loop_depth += 1;
                self.top_level_loop_depth
            }
        };

        self.out.loops.push(LoopEntry { kind, bound: "n".to_string(), depth });

        self.visit_children(n);

        match self.current_frame_mut() {
            Some(frame) => frame.exit_loop(),
            None => self.top_level_loop_depth -= 1,
        }
    }

    fn maybe_record_alias(&mut self, n: Node) {
        let Some(frame) = self.frames.last() else { return };
        let Some(param) = frame.size_param_name.clone() else { return };

        let Some((lhs_name, rhs_text)) = assignment_parts(n, self.src) else { return };

        let classification = classify(rhs_text, &param);
        if classification.is_none() {
            return;
        }

        self.frames.last_mut().unwrap().aliases.record(&lhs_name, classification);
    }

    fn visit_call(&mut self, n: Node) {
        let Some(callee) = node::call_callee(n, self.src) else {
            self.visit_children(n);
            return;
        };
        let callee = callee.to_string();

        self.out.calls.push(callee.clone());

        if let Some(frame) = self.frames.last_mut() {
            let is_self_call = frame.name.as_deref() == Some(callee.as_str());
            frame.record_call(&callee);
            if is_self_call {
                self.analyze_self_call(n);
            }
        }

        self.visit_children(n);
    }

    /// Self-call argument analysis: classifies the call's size-parameter argument and folds it
    /// into the divide or decrease accumulator.
    fn analyze_self_call(&mut self, call: Node) {
        let frame = self.frames.last_mut().unwrap();
        frame.self_calls_a += 1;

        if frame.size_param_index < 0 || frame.size_param_name.is_none() {
            return;
        }
        let size_param_index = frame.size_param_index as usize;
        let size_param_name = frame.size_param_name.clone().unwrap();

        let Some(args_text) = node::call_arguments_text(call, self.src) else { return };
        let args = node::split_arguments(args_text);
        let Some(&arg) = args.get(size_param_index) else { return };

        let classification = classify(arg, &size_param_name);
        if let Some(b) = classification.divide_b {
            frame.consider_divide_b(b);
            return;
        }
        if let Some(c) = classification.decrease_c {
            frame.consider_decrease_c(c);
            return;
        }

        if is_simple_identifier(arg) {
            if let Some(alias) = frame.aliases.lookup(arg) {
                match alias {
                    crate::alias::AliasKind::DivideByB(b) => frame.consider_divide_b(b),
                    crate::alias::AliasKind::DecreaseByC(c) => frame.consider_decrease_c(c),
                }
            }
        }
    }
}

/// Size-parameter selection: prefer a parameter literally named `n`; otherwise the rightmost
/// non-pointer parameter.
fn choose_size_param(param_list: Node, src: &str, frame: &mut FunctionFrame) {
    let decls = node::parameter_declarations(param_list);
    if decls.is_empty() {
        return;
    }

    let mut rightmost_non_pointer: Option<(usize, &str)> = None;

    for (index, decl) in decls.iter().enumerate() {
        let Some(ident) = node::find_first_descendant_of_kind(*decl, "identifier") else {
            continue;
        };
        let name = node::node_text(ident, src);

        if name == "n" {
            frame.set_size_param(name.to_string(), index as i32);
            return;
        }

        if !node::parameter_is_pointer(*decl, src) {
            rightmost_non_pointer = Some((index, name));
        }
    }

    if let Some((index, name)) = rightmost_non_pointer {
        frame.set_size_param(name.to_string(), index as i32);
    }
}

/// Extracts `(lhs_identifier, rhs_text)` from an `assignment_expression` (`left`/`right` fields)
/// or an `init_declarator` (identifier descendant / `value` field).
fn assignment_parts<'a>(n: Node, src: &'a str) -> Option<(String, &'a str)> {
    match n.kind() {
        "assignment_expression" => {
            let left = n.child_by_field_name("left")?;
            let right = n.child_by_field_name("right")?;
            let ident = node::find_first_descendant_of_kind(left, "identifier")?;
            Some((node::node_text(ident, src).to_string(), node::node_text(right, src)))
        }
        "init_declarator" => {
            let ident = node::find_first_descendant_of_kind(n, "identifier")?;
            let value = n.child_by_field_name("value")?;
            Some((node::node_text(ident, src).to_string(), node::node_text(value, src)))
        }
        _ => None,
    }
}

fn is_simple_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Walks the whole tree rooted at `root`, returning the collected loops/calls/functions and any
/// inferred recurrences.
pub fn walk(root: Node, src: &str) -> WalkOutput {
    let mut walker = Walker::new(src);
    walker.visit(root);
    walker.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tree_sitter::Parser;

    fn parse(src: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_c::language()).unwrap();
        parser.parse(src, None).unwrap()
    }

    #[test]
    fn is_simple_identifier_basic() {
        assert!(is_simple_identifier("mid"));
        assert!(is_simple_identifier("_x1"));
        assert!(!is_simple_identifier("n/2"));
        assert!(!is_simple_identifier(""));
        assert!(!is_simple_identifier("1n"));
    }

    #[test]
    fn merge_sort_divide_recurrence() {
        let src = "void ms(int*a,int n){ if(n<=1) return; int mid=n/2; ms(a,mid); ms(a,n-mid); for(int i=0;i<n;i++){} }";
        let tree = parse(src);
        let out = walk(tree.root_node(), src);

        assert_eq!(out.functions.len(), 1);
        let f = &out.functions[0];
        assert_eq!(f.name, "ms");
        assert!(f.is_recursive);
        assert_eq!(f.max_loop_depth, 1);
        let rec = f.recurrence.as_ref().unwrap();
        assert_eq!(rec.a, 2);
        assert_eq!(rec.b, Some(2));
        assert_eq!(rec.f, "n");
    }

    #[test]
    fn linear_recursion_decrease() {
        let src = "int fact(int n){ if(n<=1) return 1; return n*fact(n-1); }";
        let tree = parse(src);
        let out = walk(tree.root_node(), src);

        let f = &out.functions[0];
        let rec = f.recurrence.as_ref().unwrap();
        assert_eq!(rec.a, 1);
        assert_eq!(rec.c, Some(1));
        assert_eq!(rec.f, "1");
    }

    #[test]
    fn mixed_divide_values_flag_ambiguity() {
        let src = "void rec(int n){ rec(n/2); rec(n/3); }";
        let tree = parse(src);
        let out = walk(tree.root_node(), src);

        let f = &out.functions[0];
        let rec = f.recurrence.as_ref().unwrap();
        assert_eq!(rec.a, 2);
        assert_eq!(rec.b, Some(2));
        assert_eq!(rec.b_ambiguous, Some(true));
    }

    #[test]
    fn nested_loops_non_recursive() {
        let src = "void f(int n){ for(int i=0;i<n;i++){ for(int j=0;j<n;j++){} } }";
        let tree = parse(src);
        let out = walk(tree.root_node(), src);

        let f = &out.functions[0];
        assert!(!f.is_recursive);
        assert!(f.recurrence.is_none());
        assert_eq!(f.max_loop_depth, 2);
        assert_eq!(f.loop_count, 2);
    }

    #[test]
    fn calls_are_in_preorder() {
        let src = "void a(){ b(); c(); } void b(){ d(); }";
        let tree = parse(src);
        let out = walk(tree.root_node(), src);

        assert_eq!(out.calls, vec!["b", "c", "d"]);
    }
}
