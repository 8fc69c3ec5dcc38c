//! Maps an expression's text and a size-parameter name to a best-effort structural hint —
//! divide-by-b, shift-by-k (folded into divide-by-2^k), or decrease-by-c. Deliberately
//! syntactic: no arithmetic evaluation, no operator precedence.

use crate::text::{parse_positive_int, trim};

/// A shift amount `k` this large is rejected rather than folded into `2^k`, since it would
/// overflow a reasonable subproblem-size bound. See the divide-denominator rejection below for
/// the analogous "denominator == 1" case.
const MAX_SHIFT: i64 = 30;

/// The result of classifying one expression against one size parameter. At most one of
/// `divide` / `decrease` is ever set — see rule ordering in [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub divide_b: Option<i64>,
    pub decrease_c: Option<i64>,
}

impl Classification {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.divide_b.is_none() && self.decrease_c.is_none()
    }
}

/// Classifies `expr` with respect to size parameter `param`.
///
/// First match wins, in order: divide (`/`), shift (`>>`, folded into `2^k`), decrease (`-`).
/// `param` must appear as a substring of `expr` or nothing is classified.
pub fn classify(expr: &str, param: &str) -> Classification {
    let mut e = trim(expr);
    // strip a single trailing semicolon, if present
    if let Some(stripped) = e.strip_suffix(';') {
        e = stripped;
    }
    let e = trim(e);

    if !e.contains(param) {
        return Classification::none();
    }

    if let Some(slash) = e.find('/') {
        let rhs = &e[slash + 1..];
        match parse_positive_int(rhs) {
            Some(k) if k > 1 => {
                return Classification { divide_b: Some(k), decrease_c: None };
            }
            Some(k) => {
                log::debug!("classify: rejecting divide denominator {k} (must be > 1) in {e:?}");
            }
            None => {}
        }
        return Classification::none();
    }

    if let Some(shr) = e.find(">>") {
        let rhs = &e[shr + 2..];
        match parse_positive_int(rhs) {
            Some(k) if k >= MAX_SHIFT => {
                log::debug!("classify: rejecting shift amount {k} (>= {MAX_SHIFT}) in {e:?}");
            }
            Some(k) if k >= 1 => {
                return Classification { divide_b: Some(1i64 << k), decrease_c: None };
            }
            _ => {}
        }
        return Classification::none();
    }

    if let Some(minus) = e.find('-') {
        let rhs = &e[minus + 1..];
        if let Some(c) = parse_positive_int(rhs) {
            if c >= 1 {
                return Classification { divide_b: None, decrease_c: Some(c) };
            }
        }
        return Classification::none();
    }

    Classification::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn divide_by_constant() {
        let c = classify("n/2", "n");
        assert_eq!(c, Classification { divide_b: Some(2), decrease_c: None });
    }

    #[test]
    fn divide_with_spaces_and_trailing_semicolon() {
        let c = classify(" n / 3 ;", "n");
        assert_eq!(c, Classification { divide_b: Some(3), decrease_c: None });
    }

    #[test]
    fn divide_by_one_is_rejected() {
        assert!(classify("n/1", "n").is_none());
    }

    #[test]
    fn shift_folds_to_power_of_two() {
        let c = classify("n >> 1", "n");
        assert_eq!(c, Classification { divide_b: Some(2), decrease_c: None });
    }

    #[test]
    fn shift_amount_too_large_is_rejected() {
        assert!(classify("n >> 30", "n").is_none());
    }

    #[test]
    fn decrease_by_constant() {
        let c = classify("n-1", "n");
        assert_eq!(c, Classification { divide_b: None, decrease_c: Some(1) });
    }

    #[test]
    fn slash_wins_over_minus_even_when_minus_appears_first() {
        // '/' is searched before '-', regardless of which operator occurs earlier in the text.
        let c = classify("n - 1 / 2", "n");
        assert_eq!(c, Classification { divide_b: Some(2), decrease_c: None });
    }

    #[test]
    fn param_must_appear_in_expression() {
        assert!(classify("m/2", "n").is_none());
    }

    #[test]
    fn non_integer_divisor_is_not_classified() {
        assert!(classify("n/k", "n").is_none());
    }
}
