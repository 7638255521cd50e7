//! Разбиение строки ввода на токены.
//!
//! Токен — непрерывная последовательность непробельных символов.
//! Одиночные `+`, `-`, `*`, `/` становятся символами операций,
//! всё остальное — словами (операндами).
//!
//! # Пример
//!
//! ```
//! use roman_calculator_rs::token::{Token, Tokenizer};
//!
//! let tokens: Vec<Token> = Tokenizer::new("X / III").map(|st| st.token).collect();
//! assert_eq!(tokens[1], Token::Symbol('/'));
//! ```

use std::fmt::Display;

/// Токен выражения.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Операнд или любой другой текст.
    Word(String),
    /// Оператор: `+`, `-`, `*`, `/`.
    Symbol(char),
}

impl Token {
    fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ ('+' | '-' | '*' | '/')), None) => Self::Symbol(c),
            _ => Self::Word(text.to_owned()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Токен с информацией о позиции в исходной строке.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SpannedToken {
    /// Сам токен.
    pub token: Token,
    /// Позиция начала токена (в байтах от начала строки).
    pub pos: usize,
}

impl SpannedToken {
    /// Создаёт новый токен с позицией.
    pub const fn new(token: Token, pos: usize) -> Self {
        Self { token, pos }
    }
}

/// Итератор по токенам входной строки.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Создаёт новый токенизатор для входной строки.
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.pos += byte_len;
        self.input = rest;
        consumed
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let start_pos = self.pos;
        let text = self.advance_while(|c| !c.is_whitespace());
        if text.is_empty() {
            return None;
        }

        Some(SpannedToken::new(Token::from_text(text), start_pos))
    }
}
