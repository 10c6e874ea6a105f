/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and reduces it to a single `f64` by a
/// pure recursive walk, resolving variables through an environment of
/// bindings. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables against an [`evaluator::core::Env`].
/// - Reports unsupported operators and function names as errors.
pub mod evaluator;
/// The lexer module tokenizes a formula for further parsing.
///
/// The lexer (tokenizer) reads the raw formula text and produces a stream of
/// tokens, each corresponding to a meaningful element such as a number,
/// identifier, operator, or delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals, identifiers, and operators.
/// - Surfaces unrecognized characters as lexical errors.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of the formula,
/// respecting operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured [`crate::ast::Expr`] nodes.
/// - Validates grammar, reporting errors for malformed input.
/// - Enforces the fixed arities of the builtin functions, upholding the
///   evaluator's precondition.
pub mod parser;
