use crate::format::format_number;
use crate::token::Op;
use std::fmt::{self, Display, Formatter};

/// The ordered simplification steps of one evaluation.
///
/// A step is either a snapshot of the whole expression after a bracketed
/// group was replaced by its value, or a single reduction such as
/// `2 * 3 = 6`. A step equal to the one just before it is not recorded.
///
/// Displaying a trace enumerates its steps, one per line:
///
/// ```
/// # use bracketcalc::evaluate;
/// let evaluation = evaluate("(1 + 2) * 3").unwrap();
/// assert_eq!(
///     evaluation.trace.to_string(),
///     "1. 1 + 2 = 3\n2. 3 * 3\n3. 3 * 3 = 9\n4. 9\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<String>,
}

impl Trace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `step`, unless it repeats the last recorded step
    pub fn record<S: Into<String>>(&mut self, step: S) {
        let step = step.into();
        if self.steps.last() != Some(&step) {
            self.steps.push(step);
        }
    }

    /// Record the application `left op right = result`.
    ///
    /// Operands and result are displayed rounded to two decimals, but
    /// `result` comes from the unrounded operands: `2 ^ 0.5 ^ 2` records
    /// `1.41 ^ 2 = 2`.
    pub fn record_reduction(&mut self, left: f64, op: Op, right: f64, result: f64) {
        self.record(format!(
            "{} {} {} = {}",
            format_number(left),
            op,
            format_number(right),
            format_number(result)
        ));
    }

    /// All recorded steps, oldest first
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The most recent step
    pub fn last(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no step was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<Trace> for Vec<String> {
    fn from(trace: Trace) -> Self {
        trace.steps
    }
}

impl Display for Trace {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(fmt, "{}. {}", index + 1, step)?;
        }
        Ok(())
    }
}
