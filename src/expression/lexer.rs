//! Tokenization of doping concentration expressions

use super::ExpressionError;

/// Token types for concentration expressions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Numeric literal, scientific notation included (1.1E21)
    Number(f64),
    /// Function name, the free variable `x` or the constant `pi`
    Identifier(String),
    /// Addition operator
    Plus,
    /// Subtraction or negation operator
    Minus,
    /// Multiplication operator
    Star,
    /// Exponentiation operator `**`
    StarStar,
    /// Division operator
    Slash,
    /// Argument separator
    Comma,
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// End of input
    Eof,
}

/// A token with the column it started at.
#[derive(Debug, Clone)]
pub(crate) struct SpannedToken {
    pub(crate) token: Token,
    pub(crate) column: usize,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            column: 1,
        }
    }

    /// Consume the whole input, appending a trailing [`Token::Eof`].
    pub(crate) fn tokenize(mut self) -> Result<Vec<SpannedToken>, ExpressionError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<SpannedToken, ExpressionError> {
        self.skip_whitespace();

        let column = self.column;

        let token = match self.peek_char() {
            None => Token::Eof,
            Some('+') => {
                self.advance();
                Token::Plus
            }
            Some('-') => {
                self.advance();
                Token::Minus
            }
            Some('*') => {
                self.advance();
                if self.peek_char() == Some('*') {
                    self.advance();
                    Token::StarStar
                } else {
                    Token::Star
                }
            }
            Some('/') => {
                self.advance();
                Token::Slash
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some('^') => {
                return Err(ExpressionError::CaretNotAllowed { column });
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.read_number(column)?,
            Some(c) if c.is_alphabetic() => Token::Identifier(self.read_identifier()),
            Some(c) => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character: c,
                    column,
                });
            }
        };

        Ok(SpannedToken { token, column })
    }

    /// Read a numeric literal.
    ///
    /// An `e`/`E` only belongs to the literal when followed by a digit or a
    /// signed digit, so `2exp(x)` lexes as the number `2` and the identifier
    /// `exp` rather than a malformed exponent.
    fn read_number(&mut self, column: usize) -> Result<Token, ExpressionError> {
        let start = self.current_offset();
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        if matches!(self.peek_char(), Some('e') | Some('E')) {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            match lookahead.peek().map(|&(_, c)| c) {
                Some(c) if c.is_ascii_digit() => {
                    self.advance();
                }
                Some('+') | Some('-') => {
                    lookahead.next();
                    if matches!(lookahead.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
                        self.advance();
                        self.advance();
                    }
                }
                _ => {}
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let end = self.current_offset();
        let literal = &self.input[start..end];
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ExpressionError::MalformedNumber {
                literal: literal.to_string(),
                column,
            })
    }

    fn read_identifier(&mut self) -> String {
        let start = self.current_offset();
        while matches!(self.peek_char(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let end = self.current_offset();
        self.input[start..end].to_string()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn current_offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn advance(&mut self) {
        if self.chars.next().is_some() {
            self.column += 1;
        }
    }
}
