use crate::error::Error;
use crate::token::{Op, Token};
use crate::trace::Trace;
use tracing::trace;

/// Reduce a bracket-free token span to its value.
///
/// Numbers go onto an operand stack. An incoming operator first applies every
/// pending operator whose precedence is greater or equal to its own, so all
/// operators, `^` included, associate to the left. Each application is
/// recorded in `steps`.
pub fn reduce(tokens: &[Token], steps: &mut Trace) -> Result<f64, Error> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Op> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number { value, .. } => operands.push(value),
            Token::Op(incoming) => {
                while let Some(&top) = operators.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(top, &mut operands, steps)?;
                }
                operators.push(incoming);
            }
            Token::Space(_) => {}
            Token::Open(_) | Token::Close(_) => return Err(Error::InvalidFormat),
        }
    }

    while let Some(op) = operators.pop() {
        apply(op, &mut operands, steps)?;
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(Error::InvalidFormat),
    }
}

fn apply(op: Op, operands: &mut Vec<f64>, steps: &mut Trace) -> Result<(), Error> {
    let right = operands.pop().ok_or(Error::InvalidFormat)?;
    let left = operands.pop().ok_or(Error::InvalidFormat)?;
    let result = op.apply(left, right)?;
    trace!(left, %op, right, result, "applied operator");
    steps.record_reduction(left, op, right, result);
    operands.push(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use test_case::test_case;

    fn reduce_str(expression: &str) -> (Result<f64, Error>, Vec<String>) {
        let tokens = Lexer::new(expression).tokenize().unwrap();
        let mut steps = Trace::new();
        let result = reduce(&tokens, &mut steps);
        (result, steps.into())
    }

    #[test_case("2 + 3" => Ok(5.0))]
    #[test_case("2 + 3 * 4" => Ok(14.0) ; "multiplication first")]
    #[test_case("2 * 3 + 4" => Ok(10.0))]
    #[test_case("10 - 4 - 3" => Ok(3.0) ; "subtraction is left associative")]
    #[test_case("100 / 10 / 5" => Ok(2.0) ; "division is left associative")]
    #[test_case("2 ^ 3 ^ 2" => Ok(64.0) ; "exponentiation is left associative")]
    #[test_case("2 + 3 ^ 2 * 2" => Ok(20.0))]
    #[test_case("7" => Ok(7.0) ; "lone literal")]
    #[test_case("1 / 0" => Err(Error::DivisionByZero))]
    #[test_case("1 + 2 / 0 * 3" => Err(Error::DivisionByZero) ; "division by zero inside a chain")]
    #[test_case("2 +" => Err(Error::InvalidFormat) ; "missing operand")]
    #[test_case("2 3" => Err(Error::InvalidFormat) ; "missing operator")]
    #[test_case("" => Err(Error::InvalidFormat) ; "empty span")]
    #[test_case("(2)" => Err(Error::InvalidFormat) ; "brackets are not flat")]
    fn values(expression: &str) -> Result<f64, Error> {
        reduce_str(expression).0
    }

    #[test]
    fn steps_follow_application_order() {
        let (result, steps) = reduce_str("1 + 2 * 3 ^ 2 - 4");
        assert_eq!(result, Ok(15.0));
        pretty_assertions::assert_eq!(
            steps,
            ["3 ^ 2 = 9", "2 * 9 = 18", "1 + 18 = 19", "19 - 4 = 15"]
        );
    }

    #[test]
    fn steps_are_rounded_but_values_are_not() {
        let (result, steps) = reduce_str("1 / 3 * 3");
        assert_eq!(result, Ok(1.0));
        pretty_assertions::assert_eq!(steps, ["1 / 3 = 0.33", "0.33 * 3 = 1"]);
    }

    #[test]
    fn steps_show_rounded_operands() {
        let (result, steps) = reduce_str("2 ^ 0.5 ^ 2");
        assert!((result.unwrap() - 2.0).abs() < 1e-9);
        pretty_assertions::assert_eq!(steps, ["2 ^ 0.5 = 1.41", "1.41 ^ 2 = 2"]);
    }

    #[test]
    fn lone_literal_records_nothing() {
        let (_, steps) = reduce_str("42");
        assert!(steps.is_empty());
    }
}
