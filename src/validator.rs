//! Finite state machine that decides whether a string is a well-formed expression.
//!
//! The state is the set of symbol classes that may follow the last consumed character
//! together with the current bracket depth.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Symbol {
    Digit,
    Plus,
    Minus,
    MulDiv,
    OpenBracket,
    CloseBracket,
}

use Symbol::*;

type Allowed = &'static [Symbol];

/// At the beginning and after `(` only an operand or a sign may follow.
const AT_OPERAND_START: Allowed = &[Digit, Minus, OpenBracket];
const AFTER_DIGIT: Allowed = &[Digit, Plus, Minus, MulDiv, CloseBracket];
const AFTER_CLOSE: Allowed = &[Plus, Minus, MulDiv, CloseBracket];
const AFTER_OPERATOR: Allowed = &[Digit, OpenBracket];

fn classify(c: char) -> Option<Symbol> {
    match c {
        '0'..='9' => Some(Digit),
        '+' => Some(Plus),
        '-' => Some(Minus),
        '*' | '/' => Some(MulDiv),
        '(' => Some(OpenBracket),
        ')' => Some(CloseBracket),
        _ => None,
    }
}

/// Checks whether `expr` is an expression we can evaluate, i.e., it consists of non-negative
/// integer literals, the binary operators `+`, `-`, `*`, `/`, balanced brackets, and
/// optionally a sign `-` at the very beginning or directly after an opening bracket.
/// Whitespace is ignored.
///
/// The expression must not be empty and must end with an operand, i.e., a digit or a closing
/// bracket. Hence `"1+"` is rejected just like `"1++2"`, `"(1+2"`, `"--5"`, or `"3*-5"`.
///
/// ```rust
/// use bigcalc::is_valid_expression;
/// assert!(is_valid_expression("-5 + 3"));
/// assert!(is_valid_expression("3*(-5)"));
/// assert!(!is_valid_expression("3*-5"));
/// ```
pub fn is_valid_expression(expr: &str) -> bool {
    let mut allowed = AT_OPERAND_START;
    let mut depth = 0usize;
    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        let symbol = match classify(c) {
            Some(s) if allowed.contains(&s) => s,
            _ => return false,
        };
        allowed = match symbol {
            OpenBracket => {
                depth += 1;
                AT_OPERAND_START
            }
            CloseBracket => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
                AFTER_CLOSE
            }
            Digit => AFTER_DIGIT,
            Plus | Minus | MulDiv => AFTER_OPERATOR,
        };
    }
    // only after an operand is a closing bracket allowed
    depth == 0 && allowed.contains(&CloseBracket)
}
