use tracing::{debug, trace};

use crate::{
    token::{Operator, Postfix, Token},
    EvaluationError, Options,
};

/// Applies a binary operator. Dividing by exactly zero is an error rather
/// than an infinity.
pub fn apply(op: Operator, first: f64, second: f64) -> Result<f64, EvaluationError> {
    match op {
        Operator::Add => Ok(first + second),
        Operator::Subtract => Ok(first - second),
        Operator::Multiply => Ok(first * second),
        Operator::Divide if second == 0.0 => Err(EvaluationError::DivisionByZero),
        Operator::Divide => Ok(first / second),
        Operator::Power => Ok(first.powf(second)),
        Operator::Negate => Err(EvaluationError::UnsupportedOperator(op.to_string())),
    }
}

/// Evaluates postfix tokens with a value stack. A missing operand counts as
/// `0.0`.
pub fn run(postfix: &Postfix, options: &Options) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        trace!(%token, depth = stack.len(), "evaluating");
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Operator(Operator::Negate) => {
                let operand = stack.pop().unwrap_or(0.0);
                stack.push(0.0 - operand);
            }
            Token::Operator(op) => {
                let second = stack.pop().unwrap_or(0.0);
                let first = stack.pop().unwrap_or(0.0);
                stack.push(apply(op, first, second)?);
            }
            Token::OpenParen | Token::CloseParen => {
                return Err(EvaluationError::UnsupportedOperator(token.to_string()))
            }
        }
    }

    match stack.len() {
        0 => Err(EvaluationError::MalformedExpression { remaining: 0 }),
        1 => Ok(stack[0]),
        remaining if options.strict_stack => {
            Err(EvaluationError::MalformedExpression { remaining })
        }
        remaining => {
            debug!(remaining, "ignoring values left under the result");
            Ok(stack[remaining - 1])
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        interpreter::{apply, run},
        token::{Operator, Postfix, Token},
        EvaluationError, Options,
    };

    fn number(n: f64) -> Token {
        Token::Number(n)
    }

    fn op(op: Operator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Ok(7.0), apply(Operator::Add, 3.0, 4.0));
        assert_eq!(Ok(-1.0), apply(Operator::Subtract, 3.0, 4.0));
        assert_eq!(Ok(12.0), apply(Operator::Multiply, 3.0, 4.0));
        assert_eq!(Ok(0.75), apply(Operator::Divide, 3.0, 4.0));
        assert_eq!(Ok(81.0), apply(Operator::Power, 3.0, 4.0));
    }

    #[test]
    fn fractional_and_negative_powers() {
        assert_eq!(Ok(3.0), apply(Operator::Power, 9.0, 0.5));
        assert_eq!(Ok(0.25), apply(Operator::Power, 2.0, -2.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            Err(EvaluationError::DivisionByZero),
            apply(Operator::Divide, 5.0, 0.0)
        );
        assert_eq!(
            Err(EvaluationError::DivisionByZero),
            apply(Operator::Divide, 5.0, -0.0)
        );
    }

    #[test]
    fn negate_is_not_binary() {
        assert_eq!(
            Err(EvaluationError::UnsupportedOperator("~".to_string())),
            apply(Operator::Negate, 1.0, 2.0)
        );
    }

    #[test]
    fn postfix() {
        let postfix = Postfix::from(vec![
            number(7.0),
            number(5.0),
            number(3.0),
            op(Operator::Multiply),
            op(Operator::Add),
        ]);
        assert_eq!(Ok(22.0), run(&postfix, &Options::default()));
    }

    #[test]
    fn division_by_zero_stops_evaluation() {
        let postfix = Postfix::from(vec![
            number(5.0),
            number(0.0),
            op(Operator::Divide),
            number(1.0),
            op(Operator::Add),
        ]);
        assert_eq!(
            Err(EvaluationError::DivisionByZero),
            run(&postfix, &Options::default())
        );
    }

    #[test]
    fn missing_operands_are_zero() {
        let postfix = Postfix::from(vec![number(5.0), op(Operator::Subtract)]);
        assert_eq!(Ok(-5.0), run(&postfix, &Options::default()));

        let postfix = Postfix::from(vec![op(Operator::Negate)]);
        assert_eq!(Ok(0.0), run(&postfix, &Options::default()));

        let postfix = Postfix::from(vec![op(Operator::Add)]);
        assert_eq!(Ok(0.0), run(&postfix, &Options::default()));
    }

    #[test]
    fn leftover_values() {
        let postfix = Postfix::from(vec![number(1.0), number(2.0)]);
        assert_eq!(
            Err(EvaluationError::MalformedExpression { remaining: 2 }),
            run(&postfix, &Options::default())
        );
        assert_eq!(Ok(2.0), run(&postfix, &Options::lenient()));
    }

    #[test]
    fn empty() {
        assert_eq!(
            Err(EvaluationError::MalformedExpression { remaining: 0 }),
            run(&Postfix::new(), &Options::lenient())
        );
    }

    #[test]
    fn stray_bracket() {
        let postfix = Postfix::from(vec![number(1.0), Token::OpenParen]);
        assert_eq!(
            Err(EvaluationError::UnsupportedOperator("(".to_string())),
            run(&postfix, &Options::default())
        );
    }
}
