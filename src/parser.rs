//! Разбор строки вида `A OP B` в проверенное [`Expression`].
//!
//! # Правила
//!
//! ```text
//! line    = operand WS operator WS operand
//! operator = '+' | '-' | '*' | '/'
//! operand  = ROMAN | INTEGER
//! ```
//!
//! Операнд считается римским, если все его символы — римские цифры
//! (`I V X L C D M`), иначе он разбирается как десятичное целое.
//! Оба операнда должны быть в одной системе и лежать в диапазоне 1..=10.
//!
//! Проверки выполняются по порядку: число токенов, оператор, системы
//! счисления, разбор левого и правого операнда, диапазон.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::parser::parse;
//!
//! let expr = parse("VII * II").unwrap();
//! assert_eq!(expr.evaluate().unwrap().to_string(), "XIV");
//!
//! assert!(parse("II + 2").is_err());
//! ```

use std::num::ParseIntError;

use log::trace;
use thiserror::Error;

use crate::expression::{BinaryOp, Expression};
use crate::numeral::{NumeralSystem, RomanError, from_roman, is_canonical_roman};
use crate::token::{SpannedToken, Token, Tokenizer};

/// Наименьшее допустимое значение операнда.
pub const MIN_OPERAND: i64 = 1;
/// Наибольшее допустимое значение операнда.
pub const MAX_OPERAND: i64 = 10;

/// Ошибки, возникающие при разборе выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Число токенов отличается от трёх.
    #[error("ожидается выражение вида 'a + b', найдено токенов: {found}")]
    Format {
        /// Сколько токенов найдено.
        found: usize,
    },

    /// Неизвестный оператор.
    #[error("неизвестный оператор '{token}'")]
    InvalidOperator {
        /// Текст токена на месте оператора.
        token: String,
        /// Позиция токена.
        pos: usize,
    },

    /// Операнды записаны в разных системах счисления.
    #[error("оба числа должны быть в одной системе счисления")]
    MixedSystems {
        /// Позиция правого операнда.
        pos: usize,
    },

    /// Арабский операнд не является целым числом.
    #[error("'{token}' не является целым числом: {source}")]
    NotANumber {
        /// Текст операнда.
        token: String,
        /// Позиция операнда.
        pos: usize,
        /// Ошибка разбора числа.
        source: ParseIntError,
    },

    /// Римский операнд содержит посторонние символы.
    #[error("{source}")]
    InvalidNumeral {
        /// Позиция операнда.
        pos: usize,
        /// Ошибка разбора римского числа.
        source: RomanError,
    },

    /// Римский операнд записан не в канонической форме (строгий режим).
    #[error("'{token}' не является правильной записью римского числа")]
    MalformedNumeral {
        /// Текст операнда.
        token: String,
        /// Позиция операнда.
        pos: usize,
    },

    /// Операнд вне диапазона 1..=10.
    #[error("число {value} вне диапазона: {}", range_hint(.system))]
    OutOfRange {
        /// Значение операнда.
        value: i64,
        /// Система счисления операнда.
        system: NumeralSystem,
        /// Позиция операнда.
        pos: usize,
    },
}

fn range_hint(system: &NumeralSystem) -> &'static str {
    match system {
        NumeralSystem::Roman => "римские числа должны быть от I до X (от 1 до 10)",
        NumeralSystem::Arabic => "арабские числа должны быть от 1 до 10",
    }
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Format { .. } => None,
            Self::InvalidOperator { pos, .. }
            | Self::MixedSystems { pos }
            | Self::NotANumber { pos, .. }
            | Self::MalformedNumeral { pos, .. }
            | Self::OutOfRange { pos, .. } => Some(*pos),
            Self::InvalidNumeral { pos, source } => match source {
                RomanError::InvalidSymbol { index, .. } => Some(*pos + *index),
            },
        }
    }
}

/// Разборщик строки выражения.
pub struct Parser<'a> {
    input: &'a str,
    strict: bool,
}

impl<'a> Parser<'a> {
    /// Создаёт новый разборщик для заданной входной строки.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            strict: false,
        }
    }

    /// Включает проверку канонической записи римских чисел.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Разбирает ввод и возвращает проверенное выражение.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`ParseError`] при нарушении формата, неизвестном
    /// операторе, смешении систем счисления, некорректном операнде
    /// или операнде вне диапазона.
    pub fn parse(self) -> Result<Expression, ParseError> {
        let tokens: Vec<SpannedToken> = Tokenizer::new(self.input).collect();
        let [left, op, right] = <[SpannedToken; 3]>::try_from(tokens)
            .map_err(|tokens| ParseError::Format {
                found: tokens.len(),
            })?;

        let kind = Self::operator(&op)?;

        let left_text = left.token.to_string();
        let right_text = right.token.to_string();
        let system = NumeralSystem::classify(&left_text);
        if NumeralSystem::classify(&right_text) != system {
            return Err(ParseError::MixedSystems { pos: right.pos });
        }
        trace!("'{left_text}' {kind} '{right_text}': {system}");

        let left_value = self.operand(&left_text, left.pos, system)?;
        let right_value = self.operand(&right_text, right.pos, system)?;

        Self::check_range(left_value, left.pos, system)?;
        Self::check_range(right_value, right.pos, system)?;

        Ok(Expression::new(left_value, kind, right_value, system))
    }

    fn operator(spanned: &SpannedToken) -> Result<BinaryOp, ParseError> {
        let kind = match spanned.token {
            Token::Symbol(c) => BinaryOp::from_symbol(c),
            Token::Word(_) => None,
        };

        kind.ok_or_else(|| ParseError::InvalidOperator {
            token: spanned.token.to_string(),
            pos: spanned.pos,
        })
    }

    fn operand(&self, text: &str, pos: usize, system: NumeralSystem) -> Result<i64, ParseError> {
        match system {
            NumeralSystem::Roman => {
                let value =
                    from_roman(text).map_err(|source| ParseError::InvalidNumeral { pos, source })?;
                if self.strict && !is_canonical_roman(text) {
                    return Err(ParseError::MalformedNumeral {
                        token: text.to_owned(),
                        pos,
                    });
                }
                // Слишком большое значение всё равно отсеет проверка диапазона.
                Ok(i64::try_from(value).unwrap_or(i64::MAX))
            }
            NumeralSystem::Arabic => text.parse().map_err(|source| ParseError::NotANumber {
                token: text.to_owned(),
                pos,
                source,
            }),
        }
    }

    fn check_range(value: i64, pos: usize, system: NumeralSystem) -> Result<(), ParseError> {
        if (MIN_OPERAND..=MAX_OPERAND).contains(&value) {
            Ok(())
        } else {
            Err(ParseError::OutOfRange { value, system, pos })
        }
    }
}

/// Разбирает строку в выражение (нестрогий режим).
///
/// # Ошибки
///
/// Возвращает [`ParseError`] при некорректном вводе.
///
/// # Примеры
///
/// ```
/// use roman_calculator_rs::parser::parse;
///
/// assert_eq!(parse("2 + 2").unwrap().evaluate().unwrap().to_string(), "4");
/// assert_eq!(parse("IIII + I").unwrap().evaluate().unwrap().to_string(), "V");
/// ```
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(input).parse()
}
