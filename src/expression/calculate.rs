use num::BigInt;

use crate::{CalcResult, Expr};

impl Expr {
    /// Evaluates the tree bottom up with arbitrary precision.
    ///
    /// # Errors
    ///
    /// If some right operand of a division evaluates to zero, we return
    /// [`CalcError::DivisionByZero`](crate::CalcError::DivisionByZero).
    ///
    pub fn eval(&self) -> CalcResult<BigInt> {
        match self {
            Expr::Literal(v) => Ok(v.clone()),
            Expr::BinaryOp { op, left, right } => op.apply(left.eval()?, right.eval()?),
        }
    }
}
