//! Lexer (tokenizer) for Boolean criteria expressions.

use std::iter::Peekable;
use std::str::Chars;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A search term such as `cybersecurity`, `ISO27001` or `Malaysia`.
    Criterion,
    /// The `AND` operator.
    And,
    /// The `OR` operator.
    Or,
    /// The `NOT` operator.
    Not,
    /// Opening parenthesis `(`.
    LParen,
    /// Closing parenthesis `)`.
    RParen,
    /// End of input. Always the last token.
    Eof,
}

/// A token with its text and position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The token text. Operators are upper-cased, criteria keep their case,
    /// and `Eof` is empty.
    pub text: String,
    /// The character position where the token starts (0-indexed).
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Lexer for tokenizing criteria expressions.
///
/// Words are maximal runs of alphanumerics, `-` and `_`. Any other
/// character that is not whitespace or a parenthesis is dropped, so
/// `ISO27001,SOC2` yields the two criteria `ISO27001` and `SOC2`.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current character position in the input string.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.trim().chars().peekable(),
            position: 0,
        }
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '-' || c == '_'
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.peek() {
            if !Self::is_word_char(c) {
                break;
            }
            word.push(c);
            self.next_char();
        }
        word
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// The trailing `Eof` token is added by [`Lexer::tokenize`].
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();

            let c = *self.peek()?;
            let start = self.position;

            match c {
                '(' => {
                    self.next_char();
                    return Some(Token::new(TokenKind::LParen, "(", start));
                }
                ')' => {
                    self.next_char();
                    return Some(Token::new(TokenKind::RParen, ")", start));
                }
                _ if Self::is_word_char(c) => {
                    let word = self.read_word();
                    return Some(Self::classify(word, start));
                }
                // Stray punctuation ends the current word and is discarded.
                _ => {
                    self.next_char();
                }
            }
        }
    }

    fn classify(word: String, position: usize) -> Token {
        let upper = word.to_uppercase();
        match upper.as_str() {
            "AND" => Token::new(TokenKind::And, upper, position),
            "OR" => Token::new(TokenKind::Or, upper, position),
            "NOT" => Token::new(TokenKind::Not, upper, position),
            _ => Token::new(TokenKind::Criterion, word, position),
        }
    }

    /// Collects all tokens, terminated by a single `Eof` token.
    ///
    /// The returned vector is never empty.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::Eof, "", self.position));
        tokens
    }
}

/// Tokenizes an expression string.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).tokenize()
}
