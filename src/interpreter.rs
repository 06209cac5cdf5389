/// The evaluator module computes the value of parsed expressions.
///
/// The evaluator traverses the AST and routes every arithmetic operation
/// through the calculator, converting its failures into runtime errors that
/// carry source lines.
///
/// # Responsibilities
/// - Evaluates literals, negation and binary operations.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// tagged with its source line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric literals, operators, parentheses and comments.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// one expression tree per line, honouring operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates syntax, reporting errors with line information.
pub mod parser;
