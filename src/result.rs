use thiserror::Error;

/// This will be thrown at you if something within bigcalc went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The validator rejected the input. Contains the offending text.
    #[error("invalid expression '{0}'")]
    InvalidExpression(String),
    /// The tree builder met a structure the validator should have rejected. This indicates a
    /// bug rather than bad user input.
    #[error("malformed expression '{0}'")]
    MalformedExpression(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// bigcalc's result type with [`CalcError`](CalcError) as error type.
pub type CalcResult<T> = Result<T, CalcError>;

/// Creates a [`CalcError::MalformedExpression`](CalcError::MalformedExpression) from anything
/// that can be turned into a string.
pub fn malformed(text: impl Into<String>) -> CalcError {
    CalcError::MalformedExpression(text.into())
}
