use crate::{
    operators::{is_operator_of, Precedence},
    util::{is_unary_minus, matching_close, matching_open},
};

fn find_binary_operator(text: &[u8], precedence: Precedence, from: usize) -> Option<usize> {
    (from..text.len())
        .find(|&i| is_operator_of(text[i] as char, precedence) && !is_unary_minus(text, i))
}

/// The left operand is either a run of digits or a bracketed group, each optionally signed.
fn left_operand_start(text: &[u8], op_idx: usize) -> usize {
    if op_idx == 0 {
        return 0;
    }
    let mut start = if text[op_idx - 1] == b')' {
        matching_open(text, op_idx - 1).unwrap_or(op_idx)
    } else {
        let n_digits = text[..op_idx]
            .iter()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .count();
        op_idx - n_digits
    };
    if start > 0 && is_unary_minus(text, start - 1) {
        start -= 1;
    }
    start
}

/// Exclusive end of the right operand, a run of digits or a bracketed group.
fn right_operand_end(text: &[u8], op_idx: usize) -> usize {
    let first = op_idx + 1;
    if text.get(first) == Some(&b'(') {
        matching_close(text, first).map_or(first, |close| close + 1)
    } else {
        first
            + text[first..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count()
    }
}

/// Wraps each binary operator of the given tier together with its two operands in brackets,
/// unless the brackets are already there.
fn group_operators(text: &mut String, precedence: Precedence) {
    let mut from = 0;
    while let Some(op_idx) = find_binary_operator(text.as_bytes(), precedence, from) {
        let bytes = text.as_bytes();
        let start = left_operand_start(bytes, op_idx);
        let end = right_operand_end(bytes, op_idx);
        let is_grouped = start > 0 && bytes[start - 1] == b'(' && bytes.get(end) == Some(&b')');
        // operators inside the right operand are still to be grouped, hence we continue
        // directly after the current operator
        if is_grouped {
            from = op_idx + 1;
        } else {
            // insert the closing bracket first such that `start` stays valid
            text.insert(end, ')');
            text.insert(start, '(');
            from = op_idx + 2;
        }
    }
}

/// Inserts brackets such that each binary operator and its two operands are enclosed by
/// exactly one pair of brackets. Multiplicative operators are grouped first, so their
/// groups end up nested inside the groups of additive operators. Operators of the same
/// tier are grouped from left to right.
///
/// The input is expected to be whitespace free and valid in the sense of
/// [`is_valid_expression`](crate::is_valid_expression). Already present brackets are kept,
/// hence applying the function twice yields the same result as applying it once.
///
/// ```rust
/// use bigcalc::insert_precedence_brackets;
/// assert_eq!(insert_precedence_brackets("2+3*4"), "(2+(3*4))");
/// assert_eq!(insert_precedence_brackets("1-2-3"), "((1-2)-3)");
/// assert_eq!(insert_precedence_brackets("(2+3)*4"), "((2+3)*4)");
/// ```
pub fn insert_precedence_brackets(expr: &str) -> String {
    let mut text = expr.to_string();
    for precedence in Precedence::GROUPING_ORDER {
        group_operators(&mut text, precedence);
    }
    text
}
