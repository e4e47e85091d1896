use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use num::{BigInt, Signed};

use crate::{
    insert_precedence_brackets, is_valid_expression, operators::Operator, util, CalcError,
    CalcResult,
};

mod build;
mod calculate;
#[cfg(feature = "serde")]
mod serde;

pub use build::build_tree;

/// Binary expression tree. Leaves are integer literals, inner nodes are binary operators.
/// Each node is owned by its parent, there are no unary nodes. A sign directly in front of a
/// literal is part of the literal, a sign in front of a bracketed group `-(g)` is represented
/// as `0-(g)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(BigInt),
    BinaryOp {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Parses a string into an expression tree. Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// An [`CalcError::InvalidExpression`](CalcError::InvalidExpression) is returned if the
    /// string is not a valid expression, see
    /// [`is_valid_expression`](crate::is_valid_expression).
    ///
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// #
    /// use bigcalc::Expr;
    /// let expr = Expr::parse("2 + 3 * 4")?;
    /// assert_eq!(expr.to_string(), "(2+(3*4))");
    /// assert_eq!(expr.eval()?, bigcalc::BigInt::from(14));
    /// #
    /// #     Ok(())
    /// # }
    /// ```
    pub fn parse(text: &str) -> CalcResult<Self> {
        let stripped = util::strip_whitespace(text);
        if !is_valid_expression(&stripped) {
            return Err(CalcError::InvalidExpression(text.to_string()));
        }
        build_tree(&insert_precedence_brackets(&stripped))
    }

    /// Length of the longest path from the root to a leaf counted in nodes.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.n_nodes() + right.n_nodes(),
        }
    }

    fn fmt_operand(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Expr::Literal(v) if v.is_negative() => write!(f, "({v})"),
            _ => write!(f, "{self}"),
        }
    }
}

/// Prints the fully bracketed form that parses back into the same tree.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::BinaryOp { op, left, right } => {
                write!(f, "(")?;
                left.fmt_operand(f)?;
                write!(f, "{op}")?;
                right.fmt_operand(f)?;
                write!(f, ")")
            }
        }
    }
}

impl FromStr for Expr {
    type Err = CalcError;
    fn from_str(text: &str) -> CalcResult<Self> {
        Expr::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: i64) -> Expr {
        Expr::Literal(BigInt::from(v))
    }

    #[test]
    fn test_parse() -> CalcResult<()> {
        assert_eq!(Expr::parse("7")?, lit(7));
        assert_eq!(Expr::parse(" -7 ")?, lit(-7));
        assert_eq!(
            Expr::parse("2+3*4")?,
            Expr::binary(
                Operator::Add,
                lit(2),
                Expr::binary(Operator::Mul, lit(3), lit(4))
            )
        );
        assert_eq!(
            Expr::parse("1-2-3")?,
            Expr::binary(
                Operator::Sub,
                Expr::binary(Operator::Sub, lit(1), lit(2)),
                lit(3)
            )
        );
        assert_eq!(
            Expr::parse("1++2"),
            Err(CalcError::InvalidExpression("1++2".to_string()))
        );
        assert!("(1+2".parse::<Expr>().is_err());
        Ok(())
    }

    #[test]
    fn test_display() -> CalcResult<()> {
        fn test(text: &str, reference: &str) -> CalcResult<()> {
            let expr = Expr::parse(text)?;
            assert_eq!(expr.to_string(), reference);
            assert_eq!(Expr::parse(reference)?, expr);
            Ok(())
        }
        test("5", "5")?;
        test("-5", "-5")?;
        test("(((5)))", "5")?;
        test("-5+3", "((-5)+3)")?;
        test("2 * (-5)", "(2*(-5))")?;
        test("-(2+3)", "(0-(2+3))")?;
        test("1+2*3-4", "((1+(2*3))-4)")?;
        test("007*1", "(7*1)")?;
        Ok(())
    }

    #[test]
    fn test_depth() -> CalcResult<()> {
        let expr = Expr::parse("1")?;
        assert_eq!((expr.depth(), expr.n_nodes()), (1, 1));
        let expr = Expr::parse("1+2*3")?;
        assert_eq!((expr.depth(), expr.n_nodes()), (3, 5));
        let expr = Expr::parse("(1+2)*(3+4)")?;
        assert_eq!((expr.depth(), expr.n_nodes()), (3, 7));
        Ok(())
    }
}
