use lazy_static::lazy_static;
use num::{BigInt, Zero};
use regex::Regex;

use crate::{
    operators::{is_operator, Operator},
    result::malformed,
    util::matching_close,
    CalcResult, Expr,
};

/// Removes enclosing brackets as long as the first bracket is closed by the last character.
/// Brackets such as in `(1)+(2)` are kept.
fn strip_enclosing_brackets(mut text: &str) -> &str {
    while text.starts_with('(') && matching_close(text.as_bytes(), 0) == Some(text.len() - 1) {
        text = &text[1..text.len() - 1];
    }
    text
}

/// Finds the first operator outside of brackets that is not a sign.
fn find_split_operator(text: &str) -> CalcResult<Option<(usize, Operator)>> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    for (i, &c) in bytes.iter().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => depth = depth.checked_sub(1).ok_or_else(|| malformed(text))?,
            _ if depth == 0 && i > 0 && bytes[i - 1] != b'(' && is_operator(c as char) => {
                return Ok(Operator::from_char(c as char).map(|op| (i, op)));
            }
            _ => (),
        }
    }
    Ok(None)
}

fn parse_literal(text: &str) -> CalcResult<Expr> {
    lazy_static! {
        static ref RE_LITERAL: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    }
    if !RE_LITERAL.is_match(text) {
        return Err(malformed(text));
    }
    text.parse::<BigInt>()
        .map(Expr::Literal)
        .map_err(|_| malformed(text))
}

/// Builds the expression tree of a string that has been processed by
/// [`insert_precedence_brackets`](crate::insert_precedence_brackets), i.e., where each
/// bracket level contains at most one operator. The first operator outside of brackets
/// becomes the root, the parts to its left and to its right become the children.
///
/// # Errors
///
/// A [`CalcError::MalformedExpression`](crate::CalcError::MalformedExpression) is returned for
/// inputs that could not have passed [`is_valid_expression`](crate::is_valid_expression),
/// e.g., empty operands or unbalanced brackets.
///
pub fn build_tree(expr: &str) -> CalcResult<Expr> {
    let text = strip_enclosing_brackets(expr);
    match find_split_operator(text)? {
        Some((idx, op)) => Ok(Expr::binary(
            op,
            build_tree(&text[..idx])?,
            build_tree(&text[idx + 1..])?,
        )),
        None if text.starts_with("-(") => {
            // a sign in front of a group is a subtraction from zero
            let group = &text[1..];
            if matching_close(group.as_bytes(), 0) != Some(group.len() - 1) {
                return Err(malformed(text));
            }
            Ok(Expr::binary(
                Operator::Sub,
                Expr::Literal(BigInt::zero()),
                build_tree(group)?,
            ))
        }
        None => parse_literal(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalcError;

    fn lit(v: i64) -> Expr {
        Expr::Literal(BigInt::from(v))
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip_enclosing_brackets("((1+2))"), "1+2");
        assert_eq!(strip_enclosing_brackets("(1)+(2)"), "(1)+(2)");
        assert_eq!(strip_enclosing_brackets("((1)+(2))"), "(1)+(2)");
        assert_eq!(strip_enclosing_brackets("-(1)"), "-(1)");
        assert_eq!(strip_enclosing_brackets("((1)"), "((1)");
        assert_eq!(strip_enclosing_brackets(""), "");
    }

    #[test]
    fn test_split() -> CalcResult<()> {
        assert_eq!(find_split_operator("1+2")?, Some((1, Operator::Add)));
        assert_eq!(find_split_operator("-1*2")?, Some((2, Operator::Mul)));
        assert_eq!(find_split_operator("(-1)-(2/3)")?, Some((4, Operator::Sub)));
        assert_eq!(find_split_operator("-(1-2)")?, None);
        assert_eq!(find_split_operator("12")?, None);
        assert!(find_split_operator("1)+(2").is_err());
        Ok(())
    }

    #[test]
    fn test_build() -> CalcResult<()> {
        assert_eq!(build_tree("42")?, lit(42));
        assert_eq!(build_tree("((-42))")?, lit(-42));
        assert_eq!(
            build_tree("(2+(3*4))")?,
            Expr::binary(
                Operator::Add,
                lit(2),
                Expr::binary(Operator::Mul, lit(3), lit(4))
            )
        );
        assert_eq!(
            build_tree("(-(2+3)*4)")?,
            Expr::binary(
                Operator::Mul,
                Expr::binary(
                    Operator::Sub,
                    lit(0),
                    Expr::binary(Operator::Add, lit(2), lit(3))
                ),
                lit(4)
            )
        );
        assert_eq!(
            build_tree("99999999999999999999")?,
            Expr::Literal("99999999999999999999".parse::<BigInt>().unwrap())
        );
        Ok(())
    }

    #[test]
    fn test_malformed() {
        for text in ["", "()", "(1+)", "1+", "+", "-", "--5", "1.5", "x", "(1", "1)", "-(1"] {
            match build_tree(text) {
                Err(CalcError::MalformedExpression(_)) => (),
                other => panic!("expected malformed error for '{text}', got {other:?}"),
            }
        }
    }
}
