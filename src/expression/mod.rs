//! # Expression
//!
//! Sandboxed parsing and evaluation of doping concentration expressions.
//!
//! User formulas such as `1.1E21*H(x-5)` are parsed into a closed tree over a
//! fixed whitelist of functions (`sin`, `cos`, `tan`, `asin`, `acos`, `atan`,
//! `log`, `sqrt`, `abs`, `round`, `exp`, `pow`, the Heaviside step `H`) plus
//! the constant `pi` and the free variable `x`. Exponentiation is spelled
//! `**`; a `^` is rejected with a hint. No general evaluation mechanism is
//! involved, which keeps arbitrary user input inert.

mod lexer;
mod parser;

use miette::Diagnostic;
use parser::Ast;

/// A parsed doping concentration expression in the free variable `x`.
#[derive(Debug, Clone)]
pub struct Expression {
    ast: Ast,
}

impl Expression {
    /// Parse an expression from its textual form.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let tokens = lexer::Lexer::new(source).tokenize()?;
        let ast = parser::Parser::new(tokens).parse()?;
        Ok(Self { ast })
    }

    /// Evaluate at a position, in the unit the profile interval is given in.
    ///
    /// Evaluation is total: domain violations propagate as inf/NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.ast.evaluate(x)
    }

    /// Whether the expression references the free variable `x`.
    ///
    /// Interval bounds must be constant, so their expressions are rejected
    /// when this returns true.
    pub fn references_position(&self) -> bool {
        self.ast.references_position()
    }
}

impl std::str::FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

/// Failures while lexing or parsing a concentration expression.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[allow(missing_docs)]
pub enum ExpressionError {
    #[error("the expression is empty")]
    Empty,
    #[error("the ^ character (column {column}) is not allowed, use ** for exponentiation")]
    CaretNotAllowed { column: usize },
    #[error("unexpected character '{character}' at column {column}")]
    UnexpectedCharacter { character: char, column: usize },
    #[error("malformed number '{literal}' at column {column}")]
    MalformedNumber { literal: String, column: usize },
    #[error("unexpected {found} at column {column}")]
    UnexpectedToken { found: String, column: usize },
    #[error("unknown name '{name}' at column {column}")]
    UnknownName { name: String, column: usize },
    #[error("{name} needs parenthesised arguments (column {column})")]
    MissingArguments { name: &'static str, column: usize },
    #[error("{name} takes {expected} argument(s), found {found} (column {column})")]
    WrongArgumentCount {
        name: &'static str,
        expected: usize,
        found: usize,
        column: usize,
    },
    #[error("trailing input at column {column}")]
    TrailingInput { column: usize },
}
