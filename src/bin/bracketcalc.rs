use bracketcalc::{evaluate, Error, Evaluation};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Evaluate arithmetic expressions, one per line, and show how they simplify
#[derive(Parser, Debug)]
#[command(name = "bracketcalc")]
#[command(about = "Evaluate arithmetic expressions step by step", long_about = None)]
struct Args {
    /// Print the numbered simplification steps after each result
    #[arg(short, long)]
    steps: bool,

    /// Expression to evaluate (if not provided, reads lines from stdin)
    expression: Option<String>,
}

fn render_outcome(outcome: &Result<Evaluation, Error>, steps: bool) -> String {
    match outcome {
        Ok(evaluation) if steps => format!("Result: {}\n{}", evaluation.value, evaluation.trace),
        Ok(evaluation) => format!("Result: {}\n", evaluation.value),
        Err(e) => format!("Error: {e}\n"),
    }
}

/// Process exit status for a one-shot evaluation
fn status(outcome: &Result<Evaluation, Error>) -> u8 {
    if outcome.is_ok() {
        0
    } else {
        1
    }
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    // RUST_LOG controls the level, WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Some(expression) = args.expression {
        let outcome = evaluate(&expression);
        print!("{}", render_outcome(&outcome, args.steps));
        return Ok(ExitCode::from(status(&outcome)));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter an expression (or 'q' to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line == "q" || line == "Q" {
            break;
        }
        print!("{}", render_outcome(&evaluate(&line), args.steps));
    }
    Ok(ExitCode::SUCCESS)
}
