use crate::error::Error;
use crate::token::{Bracket, Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Self {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Split the whole input into tokens. Fails on the first character that
    /// cannot start or continue a token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let c = match self.input.next() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            c if c.is_whitespace() => {
                let mut space = String::new();
                space.push(c);
                self.take_while(&mut space, char::is_whitespace);
                Token::Space(space)
            }
            c if c.is_ascii_digit() => self.number(c)?,
            '(' => Token::Open(Bracket::Paren),
            '{' => Token::Open(Bracket::Brace),
            ')' => Token::Close(Bracket::Paren),
            '}' => Token::Close(Bracket::Brace),
            '+' | '-' | '*' | '/' | '^' => Token::Op(Op::try_from(c)?),
            _ => return Err(Error::InvalidFormat),
        };
        Ok(Some(token))
    }

    /// Lex `digits ('.' digits)?`, starting from the already consumed `first`
    fn number(&mut self, first: char) -> Result<Token, Error> {
        let mut text = String::new();
        text.push(first);
        self.take_while(&mut text, is_digit);

        if self.input.peek() == Some(&'.') {
            self.input.next();
            text.push('.');
            // a decimal point needs at least one digit after it
            if !self.input.peek().copied().map_or(false, is_digit) {
                return Err(Error::InvalidFormat);
            }
            self.take_while(&mut text, is_digit);
        }

        let value = text.parse().map_err(|_| Error::InvalidFormat)?;
        Ok(Token::Number { value, text })
    }

    fn take_while(&mut self, buffer: &mut String, accept: fn(char) -> bool) {
        while let Some(&c) = self.input.peek() {
            if !accept(c) {
                break;
            }
            self.input.next();
            buffer.push(c);
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
