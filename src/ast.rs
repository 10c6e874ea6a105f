/// An abstract syntax tree (AST) node representing an arithmetic formula.
///
/// `Expr` covers every kind of expression the evaluator understands: numeric
/// constants, variable references, unary and binary operations, and calls to
/// the builtin functions. Operators are stored as their source character and
/// function names as plain strings, so a tree may carry an operator or name
/// the evaluator does not support; evaluation reports those as errors rather
/// than rejecting them at construction time.
///
/// A tree is immutable once built. Evaluation never mutates the tree or the
/// environment it reads from, so shared references may be evaluated from
/// multiple threads without coordination.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A fixed numeric constant, such as `3.14`.
    Literal(f64),
    /// Reference to a variable by name, resolved through the environment.
    Variable(String),
    /// A unary operation. `op` is `'+'` or `'-'`.
    Unary {
        /// The unary operator character.
        op:      char,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation. `op` is one of `'+'`, `'-'`, `'*'`, `'/'`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator character.
        op:    char,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a builtin function (e.g. `sqrt(x)`).
    ///
    /// Recognized functions and their arities: `pow` takes two arguments,
    /// `sin` and `sqrt` take one.
    Call {
        /// Name of the function being called.
        function: String,
        /// Arguments to the function.
        args:     Vec<Self>,
    },
}
