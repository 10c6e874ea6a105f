use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::core::{Env, EvalResult},
};

/// Evaluates a unary operation.
///
/// Supported operators:
/// - `'+'`: returns the operand unchanged.
/// - `'-'`: numeric negation.
///
/// Any other operator character produces an `UnsupportedOperator` error
/// carrying the offending character.
///
/// # Parameters
/// - `op`: Unary operator character.
/// - `operand`: Operand expression.
/// - `env`: Variable bindings.
///
/// # Returns
/// The computed value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use kalkyl::{ast::Expr, interpreter::evaluator::{core::Env, unary::eval_unary}};
///
/// let three = Expr::Literal(3.0);
/// assert_eq!(eval_unary('-', &three, &Env::new()).unwrap(), -3.0);
/// assert_eq!(eval_unary('+', &three, &Env::new()).unwrap(), 3.0);
/// ```
pub fn eval_unary(op: char, operand: &Expr, env: &Env) -> EvalResult<f64> {
    match op {
        '+' => Ok(operand.eval(env)?),
        '-' => Ok(-operand.eval(env)?),
        op => Err(EvalError::UnsupportedOperator { op }),
    }
}
