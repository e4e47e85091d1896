#![doc(html_root_url = "https://docs.rs/bigcalc/0.3.0")]
//! Bigcalc evaluates arithmetic expressions over integers exactly, i.e., with arbitrary
//! precision. Expressions consist of non-negative integer literals, the binary operators
//! `+`, `-`, `*`, `/`, and brackets. A sign `-` is allowed at the beginning of an expression
//! and directly after an opening bracket.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use bigcalc::{eval, BigInt};
//! assert_eq!(eval("2 + 3 * 4")?, BigInt::from(14));
//! assert_eq!(eval("99999999999999999999 + 1")?.to_string(), "100000000000000000000");
//! #
//! #     Ok(())
//! # }
//! ```
//! Division truncates towards zero and dividing by zero is an error.
//! ```rust
//! use bigcalc::{eval, BigInt, CalcError};
//! assert_eq!(eval("10/3"), Ok(BigInt::from(3)));
//! assert_eq!(eval("5/0"), Err(CalcError::DivisionByZero));
//! assert!(matches!(eval("1++2"), Err(CalcError::InvalidExpression(_))));
//! ```
//!
//! Internally, an expression passes through the following stages.
//! 1. [`is_valid_expression`](is_valid_expression) checks the syntax with a finite state
//!    machine.
//! 2. [`insert_precedence_brackets`](insert_precedence_brackets) makes operator precedence
//!    explicit by inserting brackets, e.g., `2+3*4` becomes `(2+(3*4))`.
//! 3. [`build_tree`](build_tree) splits the bracketed string recursively at the
//!    outermost operator into an [`Expr`](Expr) tree.
//! 4. [`Expr::eval`](Expr::eval) folds the tree into a [`BigInt`](BigInt).
//!
//! With the feature `serde`, expressions can be serialized to and deserialized from their
//! fully bracketed string representation.

mod expression;
mod operators;
mod result;
mod rewriter;
mod util;
mod validator;

pub use num::BigInt;

pub use {
    expression::{build_tree, Expr},
    operators::{Operator, Precedence},
    result::{CalcError, CalcResult},
    rewriter::insert_precedence_brackets,
    util::strip_whitespace,
    validator::is_valid_expression,
};

/// Parses and evaluates an expression. Whitespace is ignored.
///
/// # Errors
///
/// * [`CalcError::InvalidExpression`](CalcError::InvalidExpression) if the syntax is wrong
/// * [`CalcError::DivisionByZero`](CalcError::DivisionByZero) if a divisor evaluates to zero
///
pub fn eval(text: &str) -> CalcResult<BigInt> {
    Expr::parse(text)?.eval()
}
