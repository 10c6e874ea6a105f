use kalkyl::{
    ast::Expr,
    error::{EvalError, ParseError},
    evaluate,
    interpreter::evaluator::core::Env,
    parse,
};

fn eval_str(source: &str, env: &Env) -> f64 {
    evaluate(source, env).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn assert_parse_failure(source: &str) {
    if parse(source).is_ok() {
        panic!("'{source}' parsed but was expected to fail")
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    let env = Env::new();
    assert_eq!(eval_str("0", &env), 0.0);
    assert_eq!(eval_str("42", &env), 42.0);
    assert_eq!(eval_str("3.14", &env), 3.14);
    assert_eq!(eval_str("2.1e-10", &env), 2.1e-10);
    assert_eq!(eval_str(".5", &env), 0.5);
}

#[test]
fn variables_resolve_through_the_environment() {
    let env = Env::from_iter([("x", 12.0)]);
    assert_eq!(eval_str("x", &env), 12.0);
}

#[test]
fn absent_variables_default_to_zero() {
    assert_eq!(eval_str("missing", &Env::new()), 0.0);

    // A binding for one name does not affect lookup of another.
    let env = Env::from_iter([("x", 12.0)]);
    assert_eq!(eval_str("y", &env), 0.0);
    assert_eq!(eval_str("x + y", &env), 12.0);
}

#[test]
fn unary_operators() {
    let env = Env::from_iter([("x", 7.0)]);
    assert_eq!(eval_str("+x", &env), 7.0);
    assert_eq!(eval_str("-x", &env), -7.0);
    assert_eq!(eval_str("--x", &env), 7.0);
    assert_eq!(eval_str("2 * -3", &env), -6.0);
}

#[test]
fn binary_operators_use_both_operands() {
    let env = Env::new();
    assert_eq!(eval_str("1 + 2", &env), 3.0);
    assert_eq!(eval_str("8 - 5", &env), 3.0);
    assert_eq!(eval_str("7 * 9", &env), 63.0);
    assert_eq!(eval_str("10 / 2", &env), 5.0);
}

#[test]
fn precedence_and_associativity() {
    let env = Env::new();
    assert_eq!(eval_str("1 + 2 * 3", &env), 7.0);
    assert_eq!(eval_str("(1 + 2) * 3", &env), 9.0);
    assert_eq!(eval_str("2 - 3 - 4", &env), -5.0);
    assert_eq!(eval_str("16 / 4 / 2", &env), 2.0);
    assert_eq!(eval_str("-2 + 5", &env), 3.0);
}

#[test]
fn builtin_functions() {
    let env = Env::new();
    assert_eq!(eval_str("sin(0)", &env), 0.0);
    assert_eq!(eval_str("sqrt(9)", &env), 3.0);
    assert_eq!(eval_str("sqrt(87616)", &env), 296.0);
    assert_eq!(eval_str("pow(2, 10)", &env), 1024.0);
}

#[test]
fn circle_radius_from_area() {
    let env = Env::from_iter([("A", 87616.0), ("pi", std::f64::consts::PI)]);
    assert_eq!(eval_str("sqrt(A / pi)", &env).round(), 167.0);
}

#[test]
fn taxicab_number() {
    let env = Env::from_iter([("x", 12.0), ("y", 1.0)]);
    assert_eq!(eval_str("pow(x, 3) + pow(y, 3)", &env), 1729.0);

    let env = Env::from_iter([("x", 9.0), ("y", 10.0)]);
    assert_eq!(eval_str("pow(x, 3) + pow(y, 3)", &env), 1729.0);
}

#[test]
fn numeric_edge_cases_are_not_errors() {
    let env = Env::new();
    assert!(eval_str("1 / 0", &env).is_infinite());
    assert!(eval_str("-1 / 0", &env).is_infinite());
    assert!(eval_str("sqrt(0 - 1)", &env).is_nan());
    assert!(eval_str("0 / 0", &env).is_nan());
}

#[test]
fn unsupported_operator_carries_the_operator() {
    let expr = Expr::Unary { op:      '%',
                             operand: Box::new(Expr::Literal(1.0)), };
    assert_eq!(expr.eval(&Env::new()),
               Err(EvalError::UnsupportedOperator { op: '%' }));

    let expr = Expr::Binary { left:  Box::new(Expr::Literal(1.0)),
                              op:    '^',
                              right: Box::new(Expr::Literal(2.0)), };
    assert_eq!(expr.eval(&Env::new()),
               Err(EvalError::UnsupportedOperator { op: '^' }));
}

#[test]
fn unsupported_function_carries_the_name() {
    let expr = Expr::Call { function: "tan".to_string(),
                            args:     vec![Expr::Literal(1.0)], };
    assert_eq!(expr.eval(&Env::new()),
               Err(EvalError::UnsupportedFunction { name: "tan".to_string(), }));

    // Unknown names parse fine and only fail in evaluation.
    assert!(parse("tan(1)").is_ok());
    assert!(evaluate("tan(1)", &Env::new()).is_err());
}

#[test]
fn evaluation_is_pure() {
    let env = Env::from_iter([("A", 87616.0), ("pi", std::f64::consts::PI)]);
    let before = env.clone();
    let expr = parse("sqrt(A / pi)").unwrap();

    let first = expr.eval(&env).unwrap();
    let second = expr.eval(&env).unwrap();

    assert_eq!(first, second);
    assert_eq!(env, before);
}

#[test]
fn builtin_arity_is_enforced_by_the_parser() {
    assert_eq!(parse("pow(1)"),
               Err(ParseError::WrongArgumentCount { function: "pow".to_string(),
                                                    expected: 2,
                                                    found:    1, }));
    assert_parse_failure("sin(1, 2)");
    assert_parse_failure("sqrt()");
    assert_parse_failure("pow(1, 2, 3)");
}

#[test]
fn malformed_input_fails_to_parse() {
    assert_parse_failure("");
    assert_parse_failure("(1 + 2");
    assert_parse_failure("1 2");
    assert_parse_failure("1 +");
    assert_parse_failure("* 3");
    assert_parse_failure("1 $ 2");
    assert_parse_failure("sin 1");

    assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen));
    assert!(matches!(parse("1 2"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn whitespace_is_insignificant() {
    let env = Env::from_iter([("x", 2.0)]);
    assert_eq!(eval_str("  1+2 ", &env), 3.0);
    assert_eq!(eval_str(" sqrt( x\t* 8 ) ", &env), 4.0);
    assert_eq!(eval_str("pow(\n    x,\n    3\n)", &env), 8.0);
}
