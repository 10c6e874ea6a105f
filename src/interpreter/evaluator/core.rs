use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary, call::eval_call, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Variable bindings available during evaluation.
///
/// `Env` maps variable names to `f64` values. Looking up a name that was
/// never bound yields `0.0`; an unbound variable is a documented default,
/// not an error.
///
/// Evaluation only reads the environment, so a shared `&Env` may serve any
/// number of concurrent evaluations.
///
/// # Example
/// ```
/// use kalkyl::interpreter::evaluator::core::Env;
///
/// let mut env = Env::new();
/// env.bind("x", 12.0);
///
/// assert_eq!(env.get("x"), 12.0);
/// assert_eq!(env.get("y"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    bindings: HashMap<String, f64>,
}

impl Env {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new(), }
    }

    /// Binds `name` to `value`, replacing any previous binding of that name.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks up a variable, yielding `0.0` when the name is unbound.
    #[must_use]
    pub fn get(&self, name: &str) -> f64 {
        self.bindings.get(name).copied().unwrap_or(0.0)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Env {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self { bindings: iter.into_iter()
                             .map(|(name, value)| (name.into(), value))
                             .collect(), }
    }
}

impl Expr {
    /// Evaluates an expression tree against an environment.
    ///
    /// This is the main entry point for evaluation.
    /// The evaluator dispatches based on expression variant: literals return
    /// their constant, variables resolve through `env` (unbound names yield
    /// `0.0`), and unary, binary and call nodes recurse into their operands.
    ///
    /// Evaluation is a pure recursive walk: neither the tree nor the
    /// environment is mutated, and evaluating the same tree against the same
    /// environment twice yields identical results.
    ///
    /// Numeric edge cases follow IEEE-754: division by zero produces an
    /// infinity and the square root of a negative number produces NaN; no
    /// error is raised for either.
    ///
    /// # Parameters
    /// - `env`: Variable bindings used to resolve [`Expr::Variable`] nodes.
    ///
    /// # Returns
    /// The computed `f64` wrapped in [`EvalResult`].
    ///
    /// # Errors
    /// - [`EvalError::UnsupportedOperator`] when a unary or binary node
    ///   carries an operator outside the recognized set.
    /// - [`EvalError::UnsupportedFunction`] when a call names a function
    ///   other than `pow`, `sin` or `sqrt`.
    ///
    /// # Example
    /// ```
    /// use kalkyl::{ast::Expr, interpreter::evaluator::core::Env};
    ///
    /// let expr = Expr::Call { function: "sqrt".to_string(),
    ///                         args:     vec![Expr::Literal(87616.0)], };
    ///
    /// assert_eq!(expr.eval(&Env::new()).unwrap(), 296.0);
    /// ```
    pub fn eval(&self, env: &Env) -> EvalResult<f64> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Variable(name) => Ok(env.get(name)),
            Self::Unary { op, operand } => eval_unary(*op, operand, env),
            Self::Binary { left, op, right } => eval_binary(*op, left, right, env),
            Self::Call { function, args } => eval_call(function, args, env),
        }
    }
}
