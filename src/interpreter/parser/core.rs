use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `line`: Line reported if the input runs out before the expression is
///   complete.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, line)
}

/// Parses every line of a token stream into one expression per line.
///
/// Blank lines (and lines holding only a comment) are skipped. Each
/// expression must be followed by a newline or the end of input.
///
/// # Errors
/// Returns the first `ParseError` encountered. Leftover tokens after an
/// expression produce [`ParseError::UnexpectedTrailingTokens`].
///
/// # Example
/// ```
/// use abacus::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("1 + 2\n\n3 * 4").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].line_number(), 3);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Expr>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    loop {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        let Some((_, line)) = iter.peek() else {
            break;
        };
        let line = *line;

        let expr = parse_expression(&mut iter, line)?;
        match iter.next() {
            None | Some((Token::NewLine, _)) => program.push(expr),
            Some((token, line)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                                  line:  *line, });
            },
        }
    }

    Ok(program)
}

/// Parses a token stream that must hold exactly one expression.
///
/// # Errors
/// Returns [`ParseError::EmptyInput`] if there is no expression, and
/// [`ParseError::UnexpectedTrailingTokens`] if there is more than one.
pub fn parse_single(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut program = parse_program(tokens)?;
    match program.len() {
        0 => Err(ParseError::EmptyInput { line: tokens.last().map_or(1, |(_, line)| *line) }),
        1 => Ok(program.remove(0)),
        _ => {
            let extra = program.swap_remove(1);
            Err(ParseError::UnexpectedTrailingTokens { token: "another expression".to_string(),
                                                       line:  extra.line_number(), })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, interpreter::lexer::tokenize};

    fn parse(source: &str) -> ParseResult<Expr> {
        parse_single(&tokenize(source)?)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("1 + 2 * 3").unwrap();
        let Expr::BinaryOp { op, right, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Add);
        assert!(matches!(*right,
                         Expr::BinaryOp { op: BinaryOperator::Mul,
                                          .. }));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("8 - 4 - 2").unwrap();
        let Expr::BinaryOp { left, op, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Sub);
        assert!(matches!(*left,
                         Expr::BinaryOp { op: BinaryOperator::Sub,
                                          .. }));
    }

    #[test]
    fn missing_operand_is_end_of_input() {
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("1 +\n2"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { line: 1 }));
        assert!(matches!(parse("1 + 2)"),
                         Err(ParseError::UnexpectedTrailingTokens { .. })));
    }

    #[test]
    fn empty_and_multiple_inputs() {
        assert!(matches!(parse("// nothing here\n"), Err(ParseError::EmptyInput { .. })));
        assert!(matches!(parse("1\n2"),
                         Err(ParseError::UnexpectedTrailingTokens { line: 2, .. })));
    }
}
