use crate::EvaluationError;

pub const ALLOWED_OPERATORS: &str = "+-*/^";

pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '(' || c == ')' || ALLOWED_OPERATORS.contains(c)
}

/// Rejects anything outside digits, `.`, the five operators and parentheses.
/// Whitespace is ignored.
pub fn validate(input: &str) -> Result<(), EvaluationError> {
    match input
        .chars()
        .filter(|c| !c.is_whitespace())
        .find(|c| !is_allowed(*c))
    {
        Some(found) => Err(EvaluationError::InvalidInput { found }),
        None => Ok(()),
    }
}
