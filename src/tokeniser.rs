use std::{convert::Infallible, iter::Peekable, str::Chars};

use tracing::trace;

use crate::{
    state::{SequenceAction, State, Transition},
    token::{Operator, Token},
};

type TokenState = Box<dyn State<char, Token, Infallible>>;

/// A `-` is a negation when nothing but whitespace precedes it, or when the
/// previous character is an operator or an opening parenthesis.
fn starts_operand(previous: Option<char>) -> bool {
    match previous {
        None => true,
        Some(c) => c == '(' || Operator::from_symbol(c).is_some(),
    }
}

struct NormalState {
    previous: Option<char>,
}

impl State<char, Token, Infallible> for NormalState {
    fn handle(&mut self, c: Option<char>) -> Result<Transition<char, Token, Infallible>, Infallible> {
        let Some(c) = c else {
            return Ok((None, None, SequenceAction::Done));
        };

        if c.is_whitespace() {
            return Ok((None, None, SequenceAction::Advance));
        }

        if c.is_ascii_digit() {
            return Ok((
                None,
                Some(Box::new(NumberState {
                    ..Default::default()
                })),
                SequenceAction::Hold,
            ));
        }

        let token = match c {
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            '-' if starts_operand(self.previous) => Some(Token::Operator(Operator::Negate)),
            c => Operator::from_symbol(c).map(Token::Operator),
        };
        // a stray `.` or anything unrecognised is dropped, but still counts as
        // the previous character
        self.previous = Some(c);
        Ok((token, None, SequenceAction::Advance))
    }
}

#[derive(Default)]
struct NumberState {
    point: bool,
    string: String,
}

impl NumberState {
    fn finish(&self) -> Option<Token> {
        self.string.parse().ok().map(Token::Number)
    }

    fn last(&self) -> Option<char> {
        self.string.chars().last()
    }
}

impl State<char, Token, Infallible> for NumberState {
    fn handle(&mut self, c: Option<char>) -> Result<Transition<char, Token, Infallible>, Infallible> {
        match c {
            Some(c) if c.is_ascii_digit() => {
                self.string.push(c);
                Ok((None, None, SequenceAction::Advance))
            }
            Some('.') if !self.point => {
                self.string.push('.');
                self.point = true;
                Ok((None, None, SequenceAction::Advance))
            }
            // second point: ends the number and is itself dropped
            Some('.') => Ok((
                self.finish(),
                Some(Box::new(NormalState {
                    previous: Some('.'),
                })),
                SequenceAction::Advance,
            )),
            Some(_) => Ok((
                self.finish(),
                Some(Box::new(NormalState {
                    previous: self.last(),
                })),
                SequenceAction::Hold,
            )),
            None => Ok((self.finish(), None, SequenceAction::Done)),
        }
    }
}

/// Lazily scanned tokens of one expression. Not restartable: call
/// [`tokenise`] again for a fresh pass.
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
    state: TokenState,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.done {
            let (token, new_state, action) = match self.state.handle(self.chars.peek().copied()) {
                Ok(transition) => transition,
                Err(never) => match never {},
            };
            if let Some(new_state) = new_state {
                self.state = new_state;
            }
            match action {
                SequenceAction::Advance => {
                    self.chars.next();
                }
                SequenceAction::Done => self.done = true,
                SequenceAction::Hold => {}
            }
            if let Some(token) = token {
                trace!(%token, "scanned");
                return Some(token);
            }
        }
        None
    }
}

pub fn tokenise(input: &str) -> Tokens<'_> {
    Tokens {
        chars: input.chars().peekable(),
        state: Box::new(NormalState { previous: None }),
        done: false,
    }
}
