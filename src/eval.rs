use crate::error::Error;
use crate::format::{format_number, parse_number};
use crate::reducer::reduce;
use crate::token::{render, Token};
use crate::trace::Trace;
use crate::validator::scan;
use tracing::debug;

/// The outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The final value, as written in the last step of the trace
    pub value: f64,
    /// Every simplification step, in the order it happened
    pub trace: Trace,
}

/// Validate and evaluate a single expression from `input`.
///
/// Bracketed groups are resolved innermost first: the group is reduced, and
/// its text is replaced by the value rounded to two decimals. Once no bracket
/// remains, the rest of the expression is reduced. Any error aborts the whole
/// evaluation.
///
/// # Example
///
/// ```
/// # use bracketcalc::{evaluate, Error};
/// let evaluation = evaluate("{2 + (1 + 1) * 3} ^ 2").unwrap();
/// assert_eq!(evaluation.value, 64.0);
/// assert_eq!(
///     evaluation.trace.steps(),
///     [
///         "1 + 1 = 2",
///         "{2 + 2 * 3} ^ 2",
///         "2 * 3 = 6",
///         "2 + 6 = 8",
///         "8 ^ 2",
///         "8 ^ 2 = 64",
///         "64",
///     ]
/// );
///
/// assert_eq!(evaluate("4 / (2 - 2)"), Err(Error::DivisionByZero));
/// ```
pub fn evaluate(input: &str) -> Result<Evaluation, Error> {
    let tokens = scan(input)?;
    Evaluator::new(tokens).run()
}

/// Evaluate `input` and only keep its value
///
/// ```
/// # use bracketcalc::eval;
/// assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    evaluate(input).map(|evaluation| evaluation.value)
}

/// Working state of one evaluation: the current expression and its steps
struct Evaluator {
    tokens: Vec<Token>,
    steps: Trace,
}

impl Evaluator {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            steps: Trace::new(),
        }
    }

    fn run(mut self) -> Result<Evaluation, Error> {
        // The rightmost opener always encloses an innermost group
        while let Some(open) = self.tokens.iter().rposition(Token::is_open) {
            self.resolve_group(open)?;
        }
        self.finish()
    }

    /// Replace the group opening at `open` by its formatted value
    fn resolve_group(&mut self, open: usize) -> Result<(), Error> {
        let close = self.tokens[open + 1..]
            .iter()
            .position(Token::is_close)
            .map(|offset| open + 1 + offset)
            .ok_or(Error::MismatchedBrackets)?;

        let value = self.reduce_span(open + 1, close)?;
        self.tokens
            .splice(open..=close, std::iter::once(Token::from_value(value)));

        let snapshot = render(&self.tokens).trim().to_owned();
        debug!(%snapshot, "resolved bracketed group");
        self.steps.record(snapshot);
        Ok(())
    }

    fn reduce_span(&mut self, start: usize, end: usize) -> Result<f64, Error> {
        let span = &self.tokens[start..end];
        if span.iter().any(Token::is_op) {
            reduce(span, &mut self.steps)
        } else {
            lone_literal(span).map(|(value, _)| value)
        }
    }

    fn finish(mut self) -> Result<Evaluation, Error> {
        let len = self.tokens.len();
        if self.tokens.iter().any(Token::is_op) {
            let value = self.reduce_span(0, len)?;
            self.steps.record(format_number(value));
        } else {
            let (_, text) = lone_literal(&self.tokens)?;
            self.steps.record(text);
        }

        let last = self.steps.last().ok_or(Error::InvalidFormat)?;
        let value = parse_number(last)?;
        debug!(value, steps = self.steps.len(), "evaluation finished");
        Ok(Evaluation {
            value,
            trace: self.steps,
        })
    }
}

/// The only number of an operator-free span, with its text
fn lone_literal(tokens: &[Token]) -> Result<(f64, String), Error> {
    let mut numbers = tokens.iter().filter_map(|token| match token {
        Token::Number { value, text } => Some((*value, text.clone())),
        _ => None,
    });
    match (numbers.next(), numbers.next()) {
        (Some(number), None) => Ok(number),
        _ => Err(Error::InvalidFormat),
    }
}
