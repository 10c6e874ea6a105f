use clap::Parser;
use kalkyl::{evaluate, interpreter::evaluator::core::Env};

/// kalkyl evaluates arithmetic formulas with variable bindings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formula to evaluate, e.g. "sqrt(A / pi)".
    formula: String,

    /// A variable binding of the form NAME=VALUE. May be repeated.
    #[arg(short, long, value_name = "NAME=VALUE")]
    bind: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut env = Env::new();
    for binding in &args.bind {
        let Some((name, value)) = binding.split_once('=') else {
            eprintln!("Invalid binding '{binding}'. Expected NAME=VALUE.");
            std::process::exit(1);
        };

        let Ok(value) = value.trim().parse::<f64>() else {
            eprintln!("Invalid numeric value in binding '{binding}'.");
            std::process::exit(1);
        };

        env.bind(name.trim(), value);
    }

    match evaluate(&args.formula, &env) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
