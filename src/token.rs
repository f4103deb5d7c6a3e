use crate::error::Error;
use crate::format::format_number;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, with the text it is displayed as
    Number { value: f64, text: String },
    /// A binary operator
    Op(Op),
    /// Opening bracket
    Open(Bracket),
    /// Closing bracket
    Close(Bracket),
    /// A run of whitespace, kept so snapshots keep the user's spacing
    Space(String),
}

impl Token {
    /// Build a number token from a computed value. The stored value is the
    /// one its two-decimal text parses back to.
    pub fn from_value(value: f64) -> Self {
        let text = format_number(value);
        let value = text.parse().unwrap_or(value);
        Self::Number { value, text }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Self::Space(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Self::Close(_))
    }

    pub fn is_op(&self) -> bool {
        matches!(self, Self::Op(_))
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { text, .. } | Self::Space(text) => fmt.write_str(text),
            Self::Op(op) => op.fmt(fmt),
            Self::Open(bracket) => write!(fmt, "{}", bracket.open_char()),
            Self::Close(bracket) => write!(fmt, "{}", bracket.close_char()),
        }
    }
}

/// Render a token sequence back to text
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// The two bracket kinds. Both only group; they differ in which closer
/// is allowed to end them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` and `)`
    Paren,
    /// `{` and `}`
    Brace,
}

impl Bracket {
    pub fn open_char(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Brace => '{',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Brace => '}',
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`, failing on a zero divisor
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    ///
    /// Every operator, `^` included, associates to the left: the reducer pops
    /// while the pending operator's precedence is greater or equal.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// The character this operator is written as
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Apply the operator to `left` and `right`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, Error> {
        match self {
            Self::Plus => Ok(left + right),
            Self::Minus => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(left / right)
            }
            Self::Exp => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<char> for Op {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Error> {
        match c {
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Minus),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '^' => Ok(Self::Exp),
            other => Err(Error::InvalidOperator(other)),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}
