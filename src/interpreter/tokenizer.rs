use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::TokenizationError,
    interpreter::{evaluator::core::OverflowMode, lexer::Glyph, value::core::Number},
    util::num::parse_real,
};

/// Result type used by the tokenizer.
pub type TokenResult<T> = Result<T, TokenizationError>;

/// Represents a lexical token of an arithmetic expression.
///
/// Unary minus never appears as a token of its own: it is folded into the
/// number or opening parenthesis that follows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// `+`
    Add,
    /// Binary `-`.
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// A numeric literal, sign included.
    Number(Number),
    /// `(`, possibly preceded by a unary minus.
    LParen {
        /// Whether the group is negated.
        negated: bool,
    },
    /// `)`
    RParen,
}

impl Token {
    /// Returns the binary operator this token stands for, if any.
    #[must_use]
    pub const fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Add => Some(BinaryOperator::Add),
            Self::Subtract => Some(BinaryOperator::Sub),
            Self::Multiply => Some(BinaryOperator::Mul),
            Self::Divide => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    /// Returns `true` if a `-` right after this token means subtraction.
    const fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::RParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Number(n) => write!(f, "{n}"),
            Self::LParen { negated: true } => write!(f, "-("),
            Self::LParen { negated: false } => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A numeric literal under construction.
struct Literal {
    /// Digits and separator, prefixed with `-` when negated.
    text:      String,
    /// Where the literal (or its unary minus) starts.
    start:     usize,
    /// Whether a decimal separator was seen.
    is_real:   bool,
    /// Whether any digit was seen.
    has_digit: bool,
}

impl Literal {
    /// Starts a literal at `position`, or at the unary minus preceding it.
    fn new(negated: Option<usize>, position: usize) -> Self {
        Self { text:      if negated.is_some() { "-".to_string() } else { String::new() },
               start:     negated.unwrap_or(position),
               is_real:   false,
               has_digit: false, }
    }
}

/// Fold state of a single tokenizer pass.
struct Tokenizer {
    tokens:   Vec<(Token, usize)>,
    /// Position of a `-` that was judged unary and waits for its operand.
    pending:  Option<usize>,
    literal:  Option<Literal>,
    overflow: OverflowMode,
}

impl Tokenizer {
    fn push(&mut self, token: Token, position: usize) {
        trace!(position, %token, "emitted token");
        self.tokens.push((token, position));
    }

    /// Emits a unary minus that found no operand as a plain `Subtract`, so the
    /// expression builder reports the operand as missing.
    fn release_pending(&mut self) {
        if let Some(position) = self.pending.take() {
            self.push(Token::Subtract, position);
        }
    }

    fn extend_literal(&mut self, glyph: Glyph, position: usize) -> TokenResult<()> {
        let pending = &mut self.pending;
        let literal = self.literal
                          .get_or_insert_with(|| Literal::new(pending.take(), position));

        match glyph {
            Glyph::Digit(digit) => {
                literal.text.push(digit);
                literal.has_digit = true;
            },
            _ => {
                if literal.is_real {
                    return Err(TokenizationError::MalformedNumber { position });
                }
                literal.text.push('.');
                literal.is_real = true;
            },
        }

        Ok(())
    }

    fn finish_literal(&mut self) -> TokenResult<()> {
        let Some(literal) = self.literal.take() else {
            return Ok(());
        };

        if !literal.has_digit {
            return Err(TokenizationError::MalformedNumber { position: literal.start });
        }

        let number = if literal.is_real {
            parse_real(&literal.text).map(Number::Real)
                                     .ok_or(TokenizationError::MalformedNumber { position:
                                                                                     literal.start })?
        } else {
            match literal.text.parse::<i64>() {
                Ok(n) => Number::Integer(n),
                Err(_) => match self.overflow {
                    OverflowMode::Promote => {
                        parse_real(&literal.text).map(Number::Real)
                                                 .ok_or(TokenizationError::LiteralTooLarge { position: literal.start })?
                    },
                    OverflowMode::Fail => {
                        return Err(TokenizationError::LiteralTooLarge { position: literal.start });
                    },
                },
            }
        };

        self.push(Token::Number(number), literal.start);
        Ok(())
    }

    fn step(&mut self, glyph: Glyph, position: usize) -> TokenResult<()> {
        if matches!(glyph, Glyph::Digit(_) | Glyph::DecimalSeparator) {
            return self.extend_literal(glyph, position);
        }
        self.finish_literal()?;

        match glyph {
            Glyph::Whitespace => {},
            Glyph::Minus => {
                if self.tokens.last().is_some_and(|(token, _)| token.ends_operand()) {
                    self.push(Token::Subtract, position);
                } else {
                    self.release_pending();
                    self.pending = Some(position);
                }
            },
            Glyph::LParen => {
                let negated = self.pending.take().is_some();
                self.push(Token::LParen { negated }, position);
            },
            Glyph::Plus => self.push_plain(Token::Add, position),
            Glyph::Star => self.push_plain(Token::Multiply, position),
            Glyph::Slash => self.push_plain(Token::Divide, position),
            Glyph::RParen => self.push_plain(Token::RParen, position),
            Glyph::Digit(_) | Glyph::DecimalSeparator => unreachable!("handled above"),
        }

        Ok(())
    }

    fn push_plain(&mut self, token: Token, position: usize) {
        self.release_pending();
        self.push(token, position);
    }
}

/// Folds a glyph sequence into tokens in one left-to-right pass.
///
/// - Whitespace is dropped, but still ends a numeric literal.
/// - Digits with at most one `.` form one number; with a `.` the number is
///   real, otherwise integer.
/// - `-` is subtraction after a number or `)`, and unary negation anywhere
///   else. Unary negation flips the sign of the following literal or marks the
///   following `(` as negated.
///
/// Every token is paired with the position of the glyph it starts at.
///
/// # Errors
/// - `MalformedNumber` for a second separator in one literal or a separator
///   without digits.
/// - `LiteralTooLarge` for an integer literal beyond `i64` when `overflow` is
///   [`OverflowMode::Fail`].
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::core::OverflowMode,
///     lexer::classify,
///     tokenizer::{Token, tokenize},
///     value::core::Number,
/// };
///
/// let glyphs = classify("5 - -3").unwrap();
/// let tokens = tokenize(&glyphs, OverflowMode::Promote).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(Number::Integer(5)), 0),
///                 (Token::Subtract, 2),
///                 (Token::Number(Number::Integer(-3)), 4)]);
/// ```
pub fn tokenize(glyphs: &[Glyph], overflow: OverflowMode) -> TokenResult<Vec<(Token, usize)>> {
    let mut tokenizer = Tokenizer { tokens: Vec::with_capacity(glyphs.len()),
                                    pending: None,
                                    literal: None,
                                    overflow };

    for (position, glyph) in glyphs.iter().enumerate() {
        tokenizer.step(*glyph, position)?;
    }
    tokenizer.finish_literal()?;
    tokenizer.release_pending();

    Ok(tokenizer.tokens)
}
