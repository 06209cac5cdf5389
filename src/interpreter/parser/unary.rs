use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
    util::num::i64_to_f64_checked,
};

/// Parses a unary expression.
///
/// Negation is right-associative, so `--x` is parsed as `-(-x)`. If no
/// operator is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, *line)?;
        Ok(Expr::Negate { expr: Box::new(expr),
                          line: *line, })
    } else {
        parse_primary(tokens, line)
    }
}

/// Parses a primary (atomic) expression: a number or a parenthesized
/// expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` if the line or the input ends here.
/// - `UnexpectedToken` for any other token.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line })?;

    match peeked {
        (Token::Real(..) | Token::Integer(..), _) => parse_literal(tokens, line),
        (Token::LParen, _) => parse_grouping(tokens, line),
        (Token::NewLine, line) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        (tok, line) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         line:  *line, }),
    }
}

/// Parses a numeric literal.
///
/// Integer literals are converted to `f64` only when the conversion is exact.
///
/// # Errors
/// Returns `ParseError::LiteralTooLarge` for integers beyond `2^53 - 1` in
/// magnitude and for reals that are not finite.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Real(n), line)) => {
            if !n.is_finite() {
                return Err(ParseError::LiteralTooLarge { line: *line });
            }
            Ok(Expr::Literal { value: *n,
                               line:  *line, })
        },
        Some((Token::Integer(n), line)) => {
            let value = i64_to_f64_checked(*n, ParseError::LiteralTooLarge { line: *line })?;
            Ok(Expr::Literal { value,
                               line: *line })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` when the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };
    let line = *line;
    let expr = parse_expression(tokens, line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn nested_negation() {
        let tokens = tokenize("--2").unwrap();
        let expr = parse_unary(&mut tokens.iter().peekable(), 1).unwrap();
        let Expr::Negate { expr: inner, .. } = expr else {
            panic!("expected negation");
        };
        assert!(matches!(*inner, Expr::Negate { .. }));
    }

    #[test]
    fn integer_beyond_exact_range() {
        let tokens = tokenize("9007199254740993").unwrap();
        let err = parse_primary(&mut tokens.iter().peekable(), 1).unwrap_err();
        assert_eq!(err, ParseError::LiteralTooLarge { line: 1 });
    }

    #[test]
    fn non_finite_real_token_is_rejected() {
        let tokens = [(Token::Real(f64::INFINITY), 3)];
        let err = parse_primary(&mut tokens.iter().peekable(), 3).unwrap_err();
        assert_eq!(err, ParseError::LiteralTooLarge { line: 3 });

        let tokens = [(Token::Minus, 1), (Token::Real(f64::NAN), 1)];
        let err = parse_unary(&mut tokens.iter().peekable(), 1).unwrap_err();
        assert_eq!(err, ParseError::LiteralTooLarge { line: 1 });
    }

    #[test]
    fn exhausted_input_reports_caller_line() {
        let tokens: [(Token, usize); 0] = [];
        let err = parse_literal(&mut tokens.iter().peekable(), 4).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 4 });
        let err = parse_grouping(&mut tokens.iter().peekable(), 4).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 4 });
    }

    #[test]
    fn operator_where_operand_expected() {
        let tokens = tokenize("* 2").unwrap();
        let err = parse_primary(&mut tokens.iter().peekable(), 1).unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { token: "*".to_string(),
                                                 line:  1, });
    }
}
