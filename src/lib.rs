#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Bracketcalc, a crate for step-by-step evaluation of arithmetic
//! expressions.
//!
//! The easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! assert_eq!(bracketcalc::eval("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! The [`evaluate`](fn.evaluate.html) function also returns every
//! simplification step taken on the way to the result:
//!
//! ```
//! use bracketcalc::evaluate;
//!
//! let evaluation = evaluate("(2 + 3) * 4").unwrap();
//! assert_eq!(evaluation.value, 20.0);
//! assert_eq!(
//!     evaluation.trace.steps(),
//!     ["2 + 3 = 5", "5 * 4", "5 * 4 = 20", "20"]
//! );
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - unsigned number literals: `12`, `0.5`, `3.25`. A decimal point must
//!   have digits on both sides;
//! - the binary operators `+`, `-`, `*`, `/` and `^` (`f64::powf`);
//! - two kinds of grouping brackets, `(` `)` and `{` `}`, which may nest
//!   freely but must each be closed by their own kind;
//! - whitespace anywhere between tokens.
//!
//! Any other symbol is forbidden in the input. There is no unary minus.
//!
//! `^` binds tighter than `*` and `/`, which bind tighter than `+` and `-`.
//! All operators, `^` included, associate to the left: `2^3^2` is `64`.
//!
//! # Technical details
//!
//! Bracketed groups are resolved innermost first. Each group is reduced with
//! a two stacks precedence algorithm, and replaced in the expression by its
//! value rounded to two decimals (see [`format_number`](fn.format_number.html)).
//! This rounding accumulates across groups, and the final value is rounded
//! the same way.

mod error;
mod eval;
mod format;
mod lexer;
mod reducer;
mod token;
mod trace;
mod validator;

pub use error::Error;
pub use eval::{eval, evaluate, Evaluation};
pub use format::{format_number, parse_number};
pub use token::Op;
pub use trace::Trace;
pub use validator::validate;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Initialize a tracing subscriber for tests, at DEBUG level unless
    /// `RUST_LOG` says otherwise
    pub fn init_test_logging() {
        use tracing_subscriber::{fmt, EnvFilter};

        // Another test may already have installed it
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
