mod input;
mod interpreter;
mod options;
mod parser;
mod state;
mod token;
mod tokeniser;

pub use input::{strip_whitespace, validate};
pub use interpreter::{apply, run};
pub use options::Options;
pub use parser::to_postfix;
pub use token::{precedence_table, Operator, Postfix, Token};
pub use tokeniser::{tokenise, Tokens};
use thiserror::Error;
use tracing::debug;

/// Evaluates an infix expression with the default, strict [`Options`].
pub fn evaluate(expr: &str) -> Result<f64, EvaluationError> {
    evaluate_with(expr, &Options::default())
}

pub fn evaluate_with(expr: &str, options: &Options) -> Result<f64, EvaluationError> {
    let postfix = compile(expr, options)?;
    let result = run(&postfix, options)?;
    debug!(%postfix, tokens = postfix.len(), result, "evaluated");
    Ok(result)
}

/// Validates `expr` and converts it to postfix without evaluating it.
pub fn compile(expr: &str, options: &Options) -> Result<Postfix, EvaluationError> {
    let expr = strip_whitespace(expr);
    validate(&expr)?;
    to_postfix(tokenise(&expr), options)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid character `{found}`. The allowed symbols are: digits 0-9, `.`, operators `+-*/^` and brackets `()`")]
    InvalidInput { found: char },

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Zero division is not possible")]
    DivisionByZero,

    #[error("Unsupported operator: `{0}`")]
    UnsupportedOperator(String),

    #[error("Malformed expression: {remaining} values left after evaluation")]
    MalformedExpression { remaining: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UnbalancedParentheses,
    DivisionByZero,
    UnsupportedOperator,
    MalformedExpression,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::UnsupportedOperator(_) => ErrorKind::UnsupportedOperator,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
        }
    }
}
