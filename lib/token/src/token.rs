use std::fmt::Display;

mod literal;
pub use literal::LiteralValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub struct Line(pub usize);

/// A lexical unit as produced by the scanner.
///
/// Expression nodes only carry tokens around as labels for their operators,
/// nothing in the tree ever looks inside one.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    pub line: Line,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        lexeme: impl Into<String>,
        literal: Option<LiteralValue>,
        line: usize,
    ) -> Self {
        Self { token_type, lexeme: lexeme.into(), literal, line: Line(line) }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    Str,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Eof,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_prints_lexeme() {
        let token = Token::new(TokenType::Number, "1.5", Some(1.5.into()), 3);
        assert_eq!(token.to_string(), "1.5");
        assert_eq!(token.line(), Line(3));
        assert_eq!(token.literal, Some(LiteralValue::Number(1.5)));
    }

    #[test]
    fn token_type_names() {
        assert_eq!(TokenType::Plus.to_string(), "PLUS");
        assert_eq!(TokenType::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenType::Eof.to_string(), "EOF");
    }
}
