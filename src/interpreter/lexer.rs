use logos::Logos;
use tracing::trace;

use crate::error::ClassificationError;

/// Represents the symbolic category of a single input code point.
///
/// Every successful match covers exactly one code point, so the glyph
/// sequence of an input is as long as the input itself. A glyph carries no
/// meaning about operator-vs-unary role; the tokenizer decides that.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `.`, the only supported decimal separator.
    #[token(".")]
    DecimalSeparator,
    /// A decimal digit `0` to `9`.
    #[regex("[0-9]", first_char)]
    Digit(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One whitespace code point. Runs are classified element-wise.
    #[regex(r"\s")]
    Whitespace,
}

/// Returns the code point of the current one-character slice.
fn first_char(lex: &logos::Lexer<Glyph>) -> Option<char> {
    lex.slice().chars().next()
}

impl Glyph {
    /// Classifies a single code point found at `position`.
    ///
    /// # Errors
    /// Returns `UnrecognizedSymbol` for any code point outside the supported
    /// set.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::Glyph;
    ///
    /// assert_eq!(Glyph::of('7', 0), Ok(Glyph::Digit('7')));
    /// assert_eq!(Glyph::of('\t', 0), Ok(Glyph::Whitespace));
    /// assert!(Glyph::of(',', 3).is_err());
    /// ```
    pub fn of(symbol: char, position: usize) -> Result<Self, ClassificationError> {
        let mut buf = [0; 4];
        let mut lexer = Self::lexer(symbol.encode_utf8(&mut buf));

        match (lexer.next(), lexer.next()) {
            (Some(Ok(glyph)), None) => Ok(glyph),
            _ => Err(ClassificationError::UnrecognizedSymbol { symbol, position }),
        }
    }
}

/// Classifies every code point of `source`, in order.
///
/// The returned sequence has exactly one glyph per code point; positions in
/// all later stages are indices into it. Classification stops at the first
/// unsupported code point.
///
/// # Errors
/// Returns `UnrecognizedSymbol` with the code point and its code-point index.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Glyph, classify};
///
/// let glyphs = classify("-(1)").unwrap();
/// assert_eq!(glyphs,
///            vec![Glyph::Minus, Glyph::LParen, Glyph::Digit('1'), Glyph::RParen]);
///
/// let err = classify("3 # 4").unwrap_err();
/// assert_eq!(err.to_string(), "Error at position 2: Unrecognized symbol '#'.");
/// ```
pub fn classify(source: &str) -> Result<Vec<Glyph>, ClassificationError> {
    let mut glyphs = Vec::with_capacity(source.len());
    let mut lexer = Glyph::lexer(source);

    while let Some(glyph) = lexer.next() {
        let position = glyphs.len();
        if let Ok(glyph) = glyph {
            trace!(position, ?glyph, "classified glyph");
            glyphs.push(glyph);
        } else {
            let symbol = source[lexer.span().start..].chars()
                                                     .next()
                                                     .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ClassificationError::UnrecognizedSymbol { symbol, position });
        }
    }

    Ok(glyphs)
}
