//! Turns a finished `FunctionFrame` into the output `FunctionRecord` (and, if recursive, a
//! `RecurrenceEntry`).

use crate::frame::FunctionFrame;
use crate::model::{FunctionRecord, Recurrence, RecurrenceEntry, RecurrenceModel};

/// f(n) estimation from loop-nesting depth: each nested loop is treated as linear in `n`, so
/// depth `d` becomes `n^d` (with the `d == 0` and `d == 1` cases spelled out as `"1"` and `"n"`
/// rather than `"n^0"`/`"n^1"`).
pub fn f_from_depth(max_loop_depth: u32) -> String {
    match max_loop_depth {
        0 => "1".to_string(),
        1 => "n".to_string(),
        d => format!("n^{d}"),
    }
}

/// Builds the `Recurrence` for a function known to be recursive. Divide wins over decrease when
/// both accumulators fired: this is an explicit `if`/`else if`, not an artifact of insertion
/// order into a mutable map.
fn build_recurrence(frame: &FunctionFrame) -> Recurrence {
    let f = f_from_depth(frame.max_loop_depth);

    if frame.has_divide_b && frame.divide_b > 1 {
        Recurrence {
            a: frame.self_calls_a,
            f,
            model: Some(RecurrenceModel::Divide),
            b: Some(frame.divide_b),
            c: None,
            b_ambiguous: frame.b_ambiguous.then_some(true),
        }
    } else if frame.has_decrease {
        Recurrence {
            a: frame.self_calls_a,
            f,
            model: Some(RecurrenceModel::Decrease),
            b: None,
            c: Some(frame.decrease_c),
            b_ambiguous: None,
        }
    } else {
        Recurrence {
            a: frame.self_calls_a,
            f,
            model: None,
            b: None,
            c: None,
            b_ambiguous: None,
        }
    }
}

/// Consumes a finished function frame, producing its `FunctionRecord` and, if the function was
/// seen to call itself, the corresponding `RecurrenceEntry`.
pub fn synthesize(frame: FunctionFrame) -> (FunctionRecord, Option<RecurrenceEntry>) {
    let name = frame.name.clone().unwrap_or_default();
    let recurrence = frame.saw_recursive_call.then(|| build_recurrence(&frame));

    let entry = recurrence.as_ref().map(|rec| RecurrenceEntry {
        function: name.clone(),
        a: rec.a,
        f: rec.f.clone(),
        model: rec.model,
        b: rec.b,
        c: rec.c,
        b_ambiguous: rec.b_ambiguous,
    });

    let record = FunctionRecord {
        name,
        is_recursive: frame.saw_recursive_call,
        calls: frame.calls,
        loop_count: frame.loop_count,
        max_loop_depth: frame.max_loop_depth,
        size_param: frame.size_param_name,
        size_param_index: (frame.size_param_index >= 0).then_some(frame.size_param_index),
        recurrence,
    };

    (record, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn f_from_depth_table() {
        assert_eq!(f_from_depth(0), "1");
        assert_eq!(f_from_depth(1), "n");
        assert_eq!(f_from_depth(2), "n^2");
        assert_eq!(f_from_depth(3), "n^3");
    }

    #[test]
    fn non_recursive_function_has_no_recurrence() {
        let frame = FunctionFrame::new(Some("helper".into()));
        let (record, entry) = synthesize(frame);
        assert!(!record.is_recursive);
        assert!(record.recurrence.is_none());
        assert!(entry.is_none());
    }

    #[test]
    fn divide_wins_over_decrease_when_both_fire() {
        let mut frame = FunctionFrame::new(Some("rec".into()));
        frame.saw_recursive_call = true;
        frame.self_calls_a = 2;
        frame.consider_divide_b(2);
        frame.consider_decrease_c(1);

        let (record, entry) = synthesize(frame);
        let rec = record.recurrence.unwrap();
        assert_eq!(rec.model, Some(RecurrenceModel::Divide));
        assert_eq!(rec.b, Some(2));
        assert_eq!(rec.c, None);
        assert_eq!(entry.unwrap().model, Some(RecurrenceModel::Divide));
    }

    #[test]
    fn decrease_only_produces_decrease_model() {
        let mut frame = FunctionFrame::new(Some("fact".into()));
        frame.saw_recursive_call = true;
        frame.self_calls_a = 1;
        frame.consider_decrease_c(1);

        let (record, _) = synthesize(frame);
        let rec = record.recurrence.unwrap();
        assert_eq!(rec.model, Some(RecurrenceModel::Decrease));
        assert_eq!(rec.c, Some(1));
        assert_eq!(rec.f, "1");
    }

    #[test]
    fn neither_accumulator_fires_emits_bare_a_and_f() {
        let mut frame = FunctionFrame::new(Some("rec".into()));
        frame.saw_recursive_call = true;
        frame.self_calls_a = 1;

        let (record, _) = synthesize(frame);
        let rec = record.recurrence.unwrap();
        assert_eq!(rec.model, None);
        assert_eq!(rec.b, None);
        assert_eq!(rec.c, None);
    }

    #[test]
    fn ambiguous_divide_is_flagged() {
        let mut frame = FunctionFrame::new(Some("rec".into()));
        frame.saw_recursive_call = true;
        frame.consider_divide_b(2);
        frame.consider_divide_b(3);

        let (record, entry) = synthesize(frame);
        let rec = record.recurrence.unwrap();
        assert_eq!(rec.b, Some(2));
        assert_eq!(rec.b_ambiguous, Some(true));
        assert_eq!(entry.unwrap().b_ambiguous, Some(true));
    }
}
