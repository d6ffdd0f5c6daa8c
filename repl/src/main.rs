use std::io::{BufRead, Write};

use clap::Parser;
use infix_calc::{compile, run, Options};
use tracing::{debug, warn};

const SENTINEL: &str = "done";

/// Evaluates arithmetic expressions with `+ - * / ^`, unary minus and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Accept unclosed parentheses and ignore values left over after
    /// evaluation.
    #[arg(short, long)]
    lenient: bool,

    /// Log the postfix form of each expression.
    #[arg(short, long)]
    verbose: bool,

    /// Evaluate this expression and exit instead of prompting.
    expression: Option<String>,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(
            Layer::new().with_writer(std::io::stderr).with_filter(
                Targets::new()
                    .with_default(LevelFilter::INFO)
                    .with_targets([("infix_calc", level), ("infix_repl", level)]),
            ),
        )
        .init();
}

fn calculate(expression: &str, options: &Options) -> Option<f64> {
    let result = compile(expression, options).and_then(|postfix| {
        debug!(%postfix, "polish notation of the expression");
        run(&postfix, options)
    });

    match result {
        Ok(answer) => Some(answer),
        Err(error) => {
            warn!("Sorry, the given expression cannot be calculated");
            warn!("{error}");
            None
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = if args.lenient {
        Options::lenient()
    } else {
        Options::default()
    };

    if let Some(expression) = args.expression {
        match calculate(&expression, &options) {
            Some(answer) => println!("Answer: {answer}"),
            None => std::process::exit(1),
        }
        return;
    }

    println!(
        "This is a simple calculator that can calculate expressions with the following operators: +-*/^."
    );
    println!("Provide the expression you want to calculate.");
    println!("If you want to stop the program, just type `{SENTINEL}`");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("\x1b[0;36m > ");
        print!("\x1b[0;0m");
        if std::io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                warn!("failed to read input: {error}");
                break;
            }
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query == SENTINEL {
            break;
        }

        if let Some(answer) = calculate(query, &options) {
            println!("Answer: {answer}");
        }
    }
}
