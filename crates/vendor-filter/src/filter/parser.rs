//! Recursive descent parser for criteria expressions.

use super::ast::{BinaryOperator, Expr};
use super::error::{ParseError, ParseResult};
use super::lexer::{tokenize, Token, TokenKind};

/// Deepest accepted nesting of groups, NOTs and operator chains.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser for Boolean criteria expressions.
///
/// # Grammar
///
/// ```text
/// expression ::= or_expr
/// or_expr    ::= and_expr ("OR" and_expr)*
/// and_expr   ::= not_expr ("AND" not_expr)*
/// not_expr   ::= "NOT" not_expr | primary
/// primary    ::= criterion | "(" expression ")"
/// ```
///
/// # Operator Precedence (highest to lowest)
///
/// 1. `NOT` - unary, may be stacked
/// 2. `AND` - binary, left-associative
/// 3. `OR` - binary, left-associative
///
/// Operators are case-insensitive. `NOT NOT x` is kept as a double negation.
///
/// Neither the parenthesis nesting nor the height of the resulting tree may
/// exceed [`MAX_NESTING_DEPTH`]. A left-associative chain of `n` operators
/// adds `n` levels of height.
///
/// # Example
///
/// ```
/// use vendor_filter::filter::{ExpressionParser, Expr};
///
/// let expr = ExpressionParser::parse("cybersecurity AND ISO27001").unwrap();
/// assert_eq!(
///     expr,
///     Expr::and(Expr::criterion("cybersecurity"), Expr::criterion("iso27001"))
/// );
/// ```
pub struct ExpressionParser<'t> {
    tokens: &'t [Token],
    position: usize,
    depth: usize,
    eof: Token,
}

impl<'t> ExpressionParser<'t> {
    /// Creates a parser over a token stream.
    ///
    /// The stream does not need to end in `Eof`; running off the end
    /// behaves as if it did.
    pub fn new(tokens: &'t [Token]) -> Self {
        let end = tokens.last().map(|t| t.position).unwrap_or(0);
        Self {
            tokens,
            position: 0,
            depth: 0,
            eof: Token {
                kind: TokenKind::Eof,
                text: String::new(),
                position: end,
            },
        }
    }

    /// Tokenizes and parses an expression string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedToken` when an operator or `)` appears
    /// where an operand is required, `ParseError::UnexpectedEndOfInput` when
    /// the expression stops early, `ParseError::MissingCloseParen` for an
    /// unclosed group, `ParseError::TrailingInput` when tokens remain
    /// after a complete expression and `ParseError::NestingTooDeep` past
    /// [`MAX_NESTING_DEPTH`].
    pub fn parse(input: &str) -> ParseResult<Expr> {
        let tokens = tokenize(input);
        ExpressionParser::new(&tokens).parse_all()
    }

    /// Parses the whole token stream into a single expression.
    pub fn parse_all(&mut self) -> ParseResult<Expr> {
        let (expr, _) = self.parse_or_expr()?;

        let rest = self.peek();
        if !rest.is_eof() {
            return Err(ParseError::TrailingInput {
                token: rest.text.clone(),
                position: rest.position,
            });
        }

        Ok(expr)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Fails once `level` passes the nesting limit.
    fn check_depth(level: usize, position: usize) -> ParseResult<usize> {
        if level > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                position,
            });
        }
        Ok(level)
    }

    // Each parse_* method returns the expression with its tree height.

    /// Parses OR expressions: `and_expr ("OR" and_expr)*`
    fn parse_or_expr(&mut self) -> ParseResult<(Expr, usize)> {
        let (mut left, mut height) = self.parse_and_expr()?;

        while self.check(TokenKind::Or) {
            let position = self.peek().position;
            self.advance();
            let (right, right_height) = self.parse_and_expr()?;
            height = Self::check_depth(height.max(right_height) + 1, position)?;
            left = Expr::binary(BinaryOperator::Or, left, right);
        }

        Ok((left, height))
    }

    /// Parses AND expressions: `not_expr ("AND" not_expr)*`
    fn parse_and_expr(&mut self) -> ParseResult<(Expr, usize)> {
        let (mut left, mut height) = self.parse_not_expr()?;

        while self.check(TokenKind::And) {
            let position = self.peek().position;
            self.advance();
            let (right, right_height) = self.parse_not_expr()?;
            height = Self::check_depth(height.max(right_height) + 1, position)?;
            left = Expr::binary(BinaryOperator::And, left, right);
        }

        Ok((left, height))
    }

    /// Parses unary expressions: `"NOT" not_expr | primary`
    fn parse_not_expr(&mut self) -> ParseResult<(Expr, usize)> {
        if self.check(TokenKind::Not) {
            let position = self.peek().position;
            self.depth = Self::check_depth(self.depth + 1, position)?;
            self.advance();
            let (operand, height) = self.parse_not_expr()?;
            self.depth -= 1;
            let height = Self::check_depth(height + 1, position)?;
            return Ok((Expr::negate(operand), height));
        }

        self.parse_primary()
    }

    /// Parses primary expressions: `criterion | "(" expression ")"`
    fn parse_primary(&mut self) -> ParseResult<(Expr, usize)> {
        let token = self.peek();

        match token.kind {
            TokenKind::Criterion => {
                let expr = Expr::criterion(&token.text);
                self.advance();
                Ok((expr, 1))
            }
            TokenKind::LParen => {
                self.depth = Self::check_depth(self.depth + 1, token.position)?;
                self.advance();
                let inner = self.parse_or_expr()?;
                self.depth -= 1;

                let close = self.peek();
                match close.kind {
                    TokenKind::RParen => {
                        self.advance();
                        Ok(inner)
                    }
                    TokenKind::Eof => Err(ParseError::missing_close_paren("end of expression")),
                    _ => Err(ParseError::missing_close_paren(close.text.clone())),
                }
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput),
            TokenKind::And | TokenKind::Or | TokenKind::Not | TokenKind::RParen => Err(
                ParseError::unexpected_token(token.text.clone(), token.position),
            ),
        }
    }
}
