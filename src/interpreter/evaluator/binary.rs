use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::core::{Env, EvalResult},
};

/// Evaluates a binary operation.
///
/// Supported operators: `'+'`, `'-'`, `'*'`, `'/'`. Both operands are
/// evaluated independently and combined with the corresponding operator.
/// Division by zero follows IEEE-754 and yields an infinity or NaN rather
/// than an error.
///
/// Any other operator character produces an `UnsupportedOperator` error
/// carrying the offending character.
///
/// # Parameters
/// - `op`: Binary operator character.
/// - `left`: Left operand expression.
/// - `right`: Right operand expression.
/// - `env`: Variable bindings.
///
/// # Returns
/// The computed value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use kalkyl::{ast::Expr, interpreter::evaluator::{binary::eval_binary, core::Env}};
///
/// let eight = Expr::Literal(8.0);
/// let five = Expr::Literal(5.0);
///
/// assert_eq!(eval_binary('-', &eight, &five, &Env::new()).unwrap(), 3.0);
/// ```
pub fn eval_binary(op: char, left: &Expr, right: &Expr, env: &Env) -> EvalResult<f64> {
    match op {
        '+' => Ok(left.eval(env)? + right.eval(env)?),
        '-' => Ok(left.eval(env)? - right.eval(env)?),
        '*' => Ok(left.eval(env)? * right.eval(env)?),
        '/' => Ok(left.eval(env)? / right.eval(env)?),
        op => Err(EvalError::UnsupportedOperator { op }),
    }
}
