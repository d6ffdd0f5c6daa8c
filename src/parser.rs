use tracing::trace;

use crate::{
    token::{Operator, Postfix, Token, OPEN_PAREN_PRECEDENCE},
    EvaluationError, Options,
};

/// Entries waiting on the operator stack.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Operator(Operator),
    OpenParen,
}

impl Pending {
    fn precedence(&self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::OpenParen => OPEN_PAREN_PRECEDENCE,
        }
    }
}

/// Shunting-yard: reorders infix tokens into postfix.
///
/// Binary operators of equal rank leave the stack before the incoming one is
/// pushed, which makes them left-associative. Negation never pops anything and
/// stacks right to left. `(` has the lowest rank, so only `)` takes it off the
/// stack.
pub fn to_postfix<I>(tokens: I, options: &Options) -> Result<Postfix, EvaluationError>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Postfix::new();
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        trace!(%token, depth = stack.len(), "converting");
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParen => stack.push(Pending::OpenParen),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Pending::OpenParen) => break,
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    None => return Err(EvaluationError::UnbalancedParentheses),
                }
            },
            // a prefix negation has no operand yet, so nothing may leave
            // the stack on its account
            Token::Operator(op) if op.is_unary() => stack.push(Pending::Operator(op)),
            Token::Operator(op) => {
                while let Some(top) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(Pending::Operator(top)) = stack.pop() {
                        output.push(Token::Operator(top));
                    }
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::OpenParen if options.strict_parentheses => {
                return Err(EvaluationError::UnbalancedParentheses)
            }
            Pending::OpenParen => {}
        }
    }

    Ok(output)
}
