//! Plain owned, `#[derive(Serialize)]` response types, serialized once at the HTTP boundary
//! via `serde_json` — no dynamically-typed JSON graph is built along the way.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ast {
    pub language: String,
    #[serde(rename = "rootType")]
    pub root_type: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoopEntry {
    pub kind: LoopKind,
    pub bound: String,
    pub depth: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

/// The recurrence model a function's self-calls were classified under.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceModel {
    Divide,
    Decrease,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recurrence {
    pub a: u32,
    pub f: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<RecurrenceModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_ambiguous: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionRecord {
    pub name: String,
    pub is_recursive: bool,
    pub calls: Vec<String>,
    #[serde(rename = "loopCount")]
    pub loop_count: u32,
    #[serde(rename = "maxLoopDepth")]
    pub max_loop_depth: u32,
    #[serde(skip_serializing_if = "Option::is_none", rename = "sizeParam")]
    pub size_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "sizeParamIndex")]
    pub size_param_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

/// A top-level `summary.recurrences` entry: the same recurrence fields, plus the owning
/// function's name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecurrenceEntry {
    pub function: String,
    pub a: u32,
    pub f: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<RecurrenceModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_ambiguous: Option<bool>,
}

/// The `summary.recurrence` convenience field: `{a, b, f}`, present iff exactly one recurrence
/// was found and it used the divide model with `b > 1`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecurrenceConvenience {
    pub a: u32,
    pub b: i64,
    pub f: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Summary {
    pub loops: Vec<LoopEntry>,
    pub calls: Vec<String>,
    pub functions: Vec<FunctionRecord>,
    pub recurrences: Vec<RecurrenceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceConvenience>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParseResult {
    pub ast: Ast,
    pub summary: Summary,
}

impl ParseResult {
    /// The `rootType: "unknown"`, all-empty-arrays document produced for empty code or an
    /// unsupported language.
    pub fn empty(language: String) -> Self {
        ParseResult {
            ast: Ast { language, root_type: "unknown".to_string() },
            summary: Summary::default(),
        }
    }
}
