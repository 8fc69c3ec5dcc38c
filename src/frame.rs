//! Per-function walking state and recurrence accumulators.

use crate::alias::AliasTable;

/// One in-progress function's statistics while the walker is inside its body. Consumed by value
/// when the function definition is exited (see `crate::recurrence::synthesize`).
#[derive(Debug, Clone)]
pub struct FunctionFrame {
    pub name: Option<String>,

    pub loop_depth: u32,
    pub max_loop_depth: u32,
    pub loop_count: u32,

    pub calls: Vec<String>,
    pub saw_recursive_call: bool,

    pub size_param_name: Option<String>,
    pub size_param_index: i32,

    pub aliases: AliasTable,

    pub self_calls_a: u32,
    pub has_divide_b: bool,
    pub divide_b: i64,
    pub b_ambiguous: bool,
    pub has_decrease: bool,
    pub decrease_c: i64,
}

impl FunctionFrame {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            loop_depth: 0,
            max_loop_depth: 0,
            loop_count: 0,
            calls: Vec::new(),
            saw_recursive_call: false,
            size_param_name: None,
            size_param_index: -1,
            aliases: AliasTable::new(),
            self_calls_a: 0,
            has_divide_b: false,
            divide_b: 0,
            b_ambiguous: false,
            has_decrease: false,
            decrease_c: 0,
        }
    }

    /// Sets the chosen size parameter.
    pub fn set_size_param(&mut self, name: String, index: i32) {
        self.size_param_name = Some(name);
        self.size_param_index = index;
    }

    /// Records entry into a loop, one level deeper than the current depth. Returns the new depth
    /// the caller should pass back on exit (via `exit_loop`).
    pub fn enter_loop(&mut self) {
        self.loop_count += 1;
        self.loop_depth += 1;
        if self.loop_depth > self.max_loop_depth {
            self.max_loop_depth = self.loop_depth;
        }
    }

    pub fn exit_loop(&mut self) {
        self.loop_depth -= 1;
    }

    pub fn record_call(&mut self, callee: &str) {
        self.calls.push(callee.to_string());
        if self.name.as_deref() == Some(callee) {
            self.saw_recursive_call = true;
        }
    }

    /// Combines a newly observed divide factor into the accumulator: the emitted `b` is the
    /// minimum of all observed values, and ambiguity is flagged on conflict.
    pub fn consider_divide_b(&mut self, b: i64) {
        if b <= 1 {
            return;
        }
        if !self.has_divide_b {
            self.has_divide_b = true;
            self.divide_b = b;
        } else if self.divide_b != b {
            if b < self.divide_b {
                self.divide_b = b;
            }
            self.b_ambiguous = true;
            log::debug!(
                "recurrence: ambiguous divide factor for {:?}, keeping minimum {}",
                self.name,
                self.divide_b
            );
        }
    }

    /// Combines a newly observed decrease constant into the accumulator: keeps the smallest `c`
    /// seen, matching the divide accumulator's "tighter bound wins" policy.
    pub fn consider_decrease_c(&mut self, c: i64) {
        if c < 1 {
            return;
        }
        if !self.has_decrease || c < self.decrease_c {
            self.decrease_c = c;
        }
        self.has_decrease = true;
    }
}
