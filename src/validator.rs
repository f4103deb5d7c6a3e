use crate::error::Error;
use crate::lexer::Lexer;
use crate::token::{Bracket, Token};

/// Check that `expression` is a well formed arithmetic expression.
///
/// The checks run in order, and the first failing one decides the error:
///
/// 1. every character belongs to a number, an operator, a bracket or
///    whitespace, and there is at least one token (`InvalidFormat`);
/// 2. every closing bracket closes the nearest unclosed opener of the same
///    kind (`MismatchedBrackets`);
/// 3. no opener is left unclosed (`UnclosedBrackets`);
/// 4. operands and operators alternate, and brackets wrap a non-empty
///    expression (`InvalidFormat`).
///
/// # Examples
///
/// ```
/// # use bracketcalc::{validate, Error};
/// assert_eq!(validate("{(1 + 2) * 3}"), Ok(()));
/// assert_eq!(validate("{1 + 2)"), Err(Error::MismatchedBrackets));
/// assert_eq!(validate("(2 + 3"), Err(Error::UnclosedBrackets));
/// assert_eq!(validate("2 + + 3"), Err(Error::InvalidFormat));
/// ```
pub fn validate(expression: &str) -> Result<(), Error> {
    scan(expression).map(|_| ())
}

/// Validate `expression` and hand back its tokens
pub(crate) fn scan(expression: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(expression).tokenize()?;
    if tokens.iter().all(Token::is_space) {
        return Err(Error::InvalidFormat);
    }
    check_brackets(&tokens)?;
    check_shape(&tokens)?;
    Ok(tokens)
}

fn check_brackets(tokens: &[Token]) -> Result<(), Error> {
    let mut openers: Vec<Bracket> = Vec::new();
    for token in tokens {
        match *token {
            Token::Open(bracket) => openers.push(bracket),
            Token::Close(bracket) => match openers.pop() {
                Some(opener) if opener == bracket => {}
                _ => return Err(Error::MismatchedBrackets),
            },
            _ => {}
        }
    }
    if openers.is_empty() {
        Ok(())
    } else {
        Err(Error::UnclosedBrackets)
    }
}

/// expr := term (op term)*, term := number | open expr close
fn check_shape(tokens: &[Token]) -> Result<(), Error> {
    let mut expect_operand = true;
    for token in tokens.iter().filter(|token| !token.is_space()) {
        match (token, expect_operand) {
            (Token::Number { .. }, true) => expect_operand = false,
            (Token::Op(_), false) => expect_operand = true,
            (Token::Open(_), true) | (Token::Close(_), false) => {}
            _ => return Err(Error::InvalidFormat),
        }
    }
    if expect_operand {
        Err(Error::InvalidFormat)
    } else {
        Ok(())
    }
}
