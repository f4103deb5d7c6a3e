use bracketcalc::{eval, evaluate, format_number, parse_number, validate, Error};
use test_case::test_case;

#[test_case("2+3" => Ok(5.0) ; "addition")]
#[test_case("2+3*4" => Ok(14.0) ; "multiplication before addition")]
#[test_case("(2+3)*4" => Ok(20.0) ; "grouping overrides precedence")]
#[test_case("2^3^2" => Ok(64.0) ; "exponentiation associates left")]
#[test_case("{ (8 - 2) / 4 } * 10" => Ok(15.0) ; "braces and parens group alike")]
#[test_case("5/0" => Err(Error::DivisionByZero) ; "division by zero")]
#[test_case("(2+3" => Err(Error::UnclosedBrackets) ; "unclosed bracket")]
#[test_case("2+3)" => Err(Error::MismatchedBrackets) ; "stray closer")]
#[test_case("{1+2)}" => Err(Error::MismatchedBrackets) ; "closer of the other kind")]
#[test_case("2 ** 3" => Err(Error::InvalidFormat) ; "doubled operator")]
fn evaluation(input: &str) -> Result<f64, Error> {
    eval(input)
}

#[test]
fn validation_agrees_with_evaluation() {
    let inputs = [
        "1", "(1)", "{1}", "1+", "(1", "1)", "{(1})", "1 + {2 * (3)}", "a", "",
    ];
    for input in &inputs {
        assert_eq!(
            validate(input).err(),
            evaluate(input).err(),
            "input {:?}",
            input
        );
    }
}

#[test]
fn traces_are_consistent() {
    let inputs = [
        "2+3",
        "(2+3)*4",
        "{1 + (2 * {3 ^ 2})} / 7.25",
        "((1.5))",
        "100 - (1/3) - (2/3)",
        "9",
    ];
    for input in &inputs {
        let evaluation = evaluate(input).unwrap();
        let steps = evaluation.trace.steps();
        assert!(!steps.is_empty(), "empty trace for {:?}", input);

        let last = steps[steps.len() - 1].rsplit(' ').next().unwrap();
        assert_eq!(parse_number(last), Ok(evaluation.value));

        for pair in steps.windows(2) {
            assert_ne!(pair[0], pair[1], "repeated step for {:?}", input);
        }
    }
}

#[test]
fn rounding_accumulates_through_groups() {
    let evaluation = evaluate("100 - (1/3) - (2/3)").unwrap();
    pretty_assertions::assert_eq!(
        evaluation.trace.steps(),
        [
            "2 / 3 = 0.67",
            "100 - (1/3) - 0.67",
            "1 / 3 = 0.33",
            "100 - 0.33 - 0.67",
            "100 - 0.33 = 99.67",
            "99.67 - 0.67 = 99",
            "99",
        ]
    );
    assert_eq!(evaluation.value, 99.0);
}

#[test]
fn enumerated_rendering() {
    let evaluation = evaluate("{2 * 3} + 1").unwrap();
    pretty_assertions::assert_eq!(
        evaluation.trace.to_string(),
        "1. 2 * 3 = 6\n2. 6 + 1\n3. 6 + 1 = 7\n4. 7\n"
    );
}

#[test]
fn formatting_is_idempotent() {
    for cents in -500..500 {
        let value = f64::from(cents) / 100.0;
        let formatted = format_number(value);
        assert_eq!(format_number(parse_number(&formatted).unwrap()), formatted);
    }
}

#[test]
fn errors_render_like_the_shell() {
    let rendered = evaluate("7 / (3 - 3)")
        .map(|evaluation| evaluation.value.to_string())
        .unwrap_or_else(|e| format!("Error: {e}"));
    assert_eq!(rendered, "Error: Division by zero");
}
