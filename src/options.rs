/// Knobs for the two places where the calculator can either be forgiving or
/// strict. The default is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Reject a `(` that is never closed instead of dropping it.
    pub strict_parentheses: bool,
    /// Require exactly one value left after evaluation instead of taking the
    /// top of the stack.
    pub strict_stack: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_parentheses: true,
            strict_stack: true,
        }
    }
}

impl Options {
    /// Accepts unclosed parentheses and leftover values, as the first
    /// version of the calculator did.
    pub fn lenient() -> Self {
        Self {
            strict_parentheses: false,
            strict_stack: false,
        }
    }

    pub fn with_strict_parentheses(mut self, strict: bool) -> Self {
        self.strict_parentheses = strict;
        self
    }

    pub fn with_strict_stack(mut self, strict: bool) -> Self {
        self.strict_stack = strict;
        self
    }
}

#[cfg(test)]
mod test {
    use crate::{evaluate_with, EvaluationError, Options};

    #[test]
    fn setters_toggle_one_policy() {
        let options = Options::default().with_strict_stack(false);
        assert!(options.strict_parentheses);
        assert_eq!(Ok(3.0), evaluate_with("1.2.3", &options));
        assert_eq!(
            Err(EvaluationError::UnbalancedParentheses),
            evaluate_with("(1+2", &options)
        );

        let options = Options::default().with_strict_parentheses(false);
        assert!(options.strict_stack);
        assert_eq!(Ok(3.0), evaluate_with("(1+2", &options));
        assert_eq!(
            Err(EvaluationError::MalformedExpression { remaining: 2 }),
            evaluate_with("1.2.3", &options)
        );
    }

    #[test]
    fn lenient_is_both_setters() {
        assert_eq!(
            Options::lenient(),
            Options::default()
                .with_strict_parentheses(false)
                .with_strict_stack(false)
        );
    }
}
