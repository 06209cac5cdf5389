use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras, error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line breaks separate expressions.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Comment => f.write_str("comment"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::NewLine => f.write_str("newline"),
            Self::Ignored => f.write_str("whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Why a slice of source could not become a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// The text is not part of the language.
    #[default]
    Unrecognized,
    /// A numeric literal is too large to be represented (an `i64` overflow or
    /// a real that rounds to infinity).
    LiteralTooLarge,
    /// A non-zero real literal is so small it rounds to zero.
    LiteralTooSmall,
}

/// Tokenizes `source` into `(token, line)` pairs.
///
/// Lines are numbered from 1. Each token is tagged with the line it starts
/// on, so a [`Token::NewLine`] belongs to the line it terminates.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] for any character sequence that is not
///   part of the language.
/// - [`ParseError::LiteralTooLarge`] for integers beyond `i64` and reals that
///   overflow to infinity.
/// - [`ParseError::LiteralTooSmall`] for non-zero reals that underflow to zero.
///
/// # Example
/// ```
/// use abacus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 1), (Token::Plus, 1), (Token::Real(2.5), 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        let line = lexer.extras.line;
        match lexer.next() {
            Some(Ok(token)) => tokens.push((token, line)),
            Some(Err(LexError::Unrecognized)) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line });
            },
            Some(Err(LexError::LiteralTooLarge)) => {
                return Err(ParseError::LiteralTooLarge { line });
            },
            Some(Err(LexError::LiteralTooSmall)) => {
                return Err(ParseError::LiteralTooSmall { line });
            },
            None => break,
        }
    }

    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value, always finite.
/// - `Err(LexError::LiteralTooLarge)`: If the literal overflows to infinity.
/// - `Err(LexError::LiteralTooSmall)`: If a non-zero literal rounds to zero.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    let value: f64 = slice.parse().map_err(|_| LexError::Unrecognized)?;

    if !value.is_finite() {
        return Err(LexError::LiteralTooLarge);
    }
    let mantissa = slice.split(['e', 'E']).next().unwrap_or(slice);
    if value == 0.0 && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(LexError::LiteralTooSmall);
    }
    Ok(value)
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if successful.
/// - `Err(LexError::LiteralTooLarge)`: If the token slice does not fit in an
///   `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}
