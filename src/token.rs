use std::fmt::Display;

/// Rank of `(` on the operator stack. Lower than every operator, so only a
/// matching `)` ever removes it.
pub const OPEN_PAREN_PRECEDENCE: u8 = 0;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Unary minus. Never typed by the user, the tokeniser rewrites `-` into it.
    Negate,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Negate,
    ];

    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
            Self::Negate => 4,
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
            Self::Negate => '~',
        }
    }

    /// Maps a typed symbol to its binary operator. `~` is internal and has no
    /// typed form.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Negate)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
        }
    }
}

/// The whole precedence table, `(` included, lowest rank first.
pub fn precedence_table() -> Vec<(char, u8)> {
    let mut table = vec![('(', OPEN_PAREN_PRECEDENCE)];
    table.extend(Operator::ALL.iter().map(|op| (op.symbol(), op.precedence())));
    table
}

/// Tokens in reverse polish order, operands ahead of the operator consuming them.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
