use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::core::{Env, EvalResult},
};

/// Evaluates a call to a builtin function.
///
/// Supported functions:
/// - `pow(a, b)`: `a` raised to the power `b`.
/// - `sin(a)`: sine of `a` radians.
/// - `sqrt(a)`: non-negative square root; a negative argument yields NaN per
///   IEEE-754, not an error.
///
/// Any other function name produces an `UnsupportedFunction` error carrying
/// the offending name.
///
/// Argument counts are a precondition upheld by the parser (`pow` takes two
/// arguments, `sin` and `sqrt` one each) and are not checked here; a tree
/// violating that contract panics on the out-of-bounds index.
///
/// # Parameters
/// - `function`: Name of the function being called.
/// - `args`: Argument expressions, with the arity documented above.
/// - `env`: Variable bindings.
///
/// # Returns
/// The computed value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use kalkyl::{ast::Expr, interpreter::evaluator::{call::eval_call, core::Env}};
///
/// let args = [Expr::Literal(12.0), Expr::Literal(3.0)];
/// assert_eq!(eval_call("pow", &args, &Env::new()).unwrap(), 1728.0);
/// ```
pub fn eval_call(function: &str, args: &[Expr], env: &Env) -> EvalResult<f64> {
    match function {
        "pow" => Ok(args[0].eval(env)?.powf(args[1].eval(env)?)),
        "sin" => Ok(args[0].eval(env)?.sin()),
        "sqrt" => Ok(args[0].eval(env)?.sqrt()),
        name => Err(EvalError::UnsupportedFunction { name: name.to_string(), }),
    }
}
