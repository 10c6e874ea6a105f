use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Fixed arities of the builtin functions the evaluator provides.
///
/// The evaluator assumes these argument counts without checking them, so the
/// parser rejects calls that would break that precondition.
const BUILTIN_ARITIES: &[(&str, usize)] = &[("pow", 2), ("sin", 1), ("sqrt", 1)];

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`.
/// Unary operators are right-associative, so an input like `--x` is parsed
/// as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Plus) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op:      '+',
                         operand: Box::new(expr), })
    } else if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op:      '-',
                         operand: Box::new(expr), })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Number(..)) => parse_literal(tokens),
        Some(Token::LParen) => parse_grouping(tokens),
        Some(Token::Identifier(_)) => parse_identifier_or_call(tokens),
        Some(tok) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"), }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a numeric literal into an [`Expr::Literal`] node.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number token.
///
/// # Returns
/// The literal expression node.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a numeric literal or the
/// input ends unexpectedly.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Expr::Literal(*value)),
        Some(tok) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"), }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized grouping `( expression )`.
///
/// The grouping has no node of its own; the inner expression is returned
/// directly.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression.
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` when the matching `)` is
/// missing, and propagates errors from the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // consume '('
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen),
    }
}

/// Parses an identifier, producing a variable reference or a function call.
///
/// If the identifier is immediately followed by `(`, a comma-separated
/// argument list is parsed and an [`Expr::Call`] is produced; otherwise the
/// identifier becomes an [`Expr::Variable`].
///
/// Calls to the builtin functions are checked against their fixed arities
/// here. Calls to unknown names parse fine (their arity is unknowable) and
/// fail later during evaluation.
///
/// Grammar:
/// ```text
///     identifier_or_call := identifier
///                         | identifier "(" (expression ("," expression)*)? ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A variable or call expression node.
///
/// # Errors
/// Returns a `ParseError` if the argument list is malformed or a builtin is
/// called with the wrong number of arguments.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Identifier(n)) => n.clone(),
        Some(tok) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"), });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput);
        },
    };

    match tokens.peek() {
        Some(Token::LParen) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

            if let Some((_, arity)) = BUILTIN_ARITIES.iter().find(|(n, _)| *n == name)
               && args.len() != *arity
            {
                return Err(ParseError::WrongArgumentCount { function: name,
                                                            expected: *arity,
                                                            found:    args.len(), });
            }

            Ok(Expr::Call { function: name,
                            args })
        },
        _ => Ok(Expr::Variable(name)),
    }
}
