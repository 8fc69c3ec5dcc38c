//! Top-level orchestration: JSON decode → parse → walk → JSON encode.
//!
//! `parse_code` builds owned `serde` types directly rather than an intermediate JSON graph.

use tree_sitter::Parser;

use crate::model::{ParseResult, RecurrenceConvenience, RecurrenceModel, Summary};
use crate::walker;

/// Analyzes `code` as the given `language`. Only `"c"` is supported; any other value (including
/// the default) still produces a well-formed, empty-array `ParseResult` with `ast.language` set
/// to whatever was supplied.
pub fn parse_code(language: &str, code: &str) -> ParseResult {
    if code.is_empty() {
        return ParseResult::empty(language.to_string());
    }

    if language != "c" {
        log::debug!("parse_code: unsupported language {language:?}, returning empty summary");
        return ParseResult::empty(language.to_string());
    }

    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_c::language())
        .expect("tree-sitter-c grammar is statically linked and always loads");

    let tree = parser.parse(code, None).expect("tree-sitter parse is total, never fails");
    let root = tree.root_node();

    let out = walker::walk(root, code);

    let mut summary = Summary {
        loops: out.loops,
        calls: out.calls,
        functions: out.functions,
        recurrences: out.recurrences,
        recurrence: None,
    };
    summary.recurrence = convenience_recurrence(&summary);

    ParseResult {
        ast: crate::model::Ast { language: language.to_string(), root_type: root.kind().to_string() },
        summary,
    }
}

/// `summary.recurrence` is present iff exactly one recurrence was found and it is a divide model
/// with `b > 1`.
fn convenience_recurrence(summary: &Summary) -> Option<RecurrenceConvenience> {
    let [only] = summary.recurrences.as_slice() else { return None };
    if only.model != Some(RecurrenceModel::Divide) {
        return None;
    }
    let b = only.b?;
    if b <= 1 {
        return None;
    }
    Some(RecurrenceConvenience { a: only.a, b, f: only.f.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_code_yields_empty_summary() {
        let result = parse_code("c", "");
        assert_eq!(result.ast.root_type, "unknown");
        assert_eq!(result.ast.language, "c");
        assert!(result.summary.functions.is_empty());
        assert!(result.summary.recurrence.is_none());
    }

    #[test]
    fn unknown_language_yields_empty_summary_with_language_preserved() {
        let result = parse_code("python", "def f(): pass");
        assert_eq!(result.ast.language, "python");
        assert_eq!(result.ast.root_type, "unknown");
        assert!(result.summary.functions.is_empty());
    }

    #[test]
    fn merge_sort_exposes_convenience_recurrence() {
        let code = "void ms(int*a,int n){ if(n<=1) return; int mid=n/2; ms(a,mid); ms(a,n-mid); for(int i=0;i<n;i++){} }";
        let result = parse_code("c", code);

        assert_eq!(result.ast.root_type, "translation_unit");
        assert_eq!(result.summary.functions.len(), 1);
        assert_eq!(result.summary.recurrences.len(), 1);

        let convenience = result.summary.recurrence.unwrap();
        assert_eq!(convenience.a, 2);
        assert_eq!(convenience.b, 2);
        assert_eq!(convenience.f, "n");
    }

    #[test]
    fn decrease_model_does_not_produce_convenience_field() {
        let code = "int fact(int n){ if(n<=1) return 1; return n*fact(n-1); }";
        let result = parse_code("c", code);
        assert!(result.summary.recurrence.is_none());
    }

    #[test]
    fn binary_search_shift_divide() {
        let code = "int bs(int*arr,int n){ if(n<=0) return -1; return bs(arr, n>>1); }";
        let result = parse_code("c", code);

        let rec = &result.summary.recurrences[0];
        assert_eq!(rec.a, 1);
        assert_eq!(rec.b, Some(2));
        assert_eq!(rec.f, "1");
    }

    #[test]
    fn idempotent_across_repeated_parses() {
        let code = "void ms(int*a,int n){ int mid=n/2; ms(a,mid); ms(a,n-mid); }";
        let first = serde_json::to_string(&parse_code("c", code)).unwrap();
        let second = serde_json::to_string(&parse_code("c", code)).unwrap();
        assert_eq!(first, second);
    }
}
