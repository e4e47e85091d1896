use std::fmt::{self, Display, Formatter};

use num::{BigInt, Zero};

use crate::{CalcError, CalcResult};

/// Operators are grouped into tiers. Operators of a higher tier bind tighter, operators
/// within one tier associate from left to right.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

impl Precedence {
    /// Tiers in the order in which their operators need to be grouped, tightest first.
    pub const GROUPING_ORDER: [Precedence; 2] = [Precedence::Multiplicative, Precedence::Additive];
}

/// The four binary operators of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn repr(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Operator::Add | Operator::Sub => Precedence::Additive,
            Operator::Mul | Operator::Div => Precedence::Multiplicative,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// Dividing by zero results in [`CalcError::DivisionByZero`](CalcError::DivisionByZero).
    /// Division truncates towards zero.
    ///
    pub fn apply(&self, a: BigInt, b: BigInt) -> CalcResult<BigInt> {
        Ok(match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => {
                if b.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

/// Checks whether `c` is one of the operators of the given tier.
pub fn is_operator_of(c: char, precedence: Precedence) -> bool {
    Operator::from_char(c).is_some_and(|op| op.precedence() == precedence)
}

pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}
