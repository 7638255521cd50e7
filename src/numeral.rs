//! Преобразование между римскими и арабскими числами.
//!
//! Разбор римских чисел намеренно нестрогий: строка сканируется справа
//! налево, цифра меньше предыдущей вычитается, иначе прибавляется.
//! Поэтому `IIII`, `VX` и `IC` разбираются без ошибок. Для проверки
//! канонической записи есть [`is_canonical_roman`].
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::numeral::{from_roman, to_roman};
//!
//! assert_eq!(to_roman(1994), "MCMXCIV");
//! assert_eq!(from_roman("MCMXCIV"), Ok(1994));
//! assert_eq!(from_roman("IIII"), Ok(4));
//! ```

use std::fmt::{self, Display};

use thiserror::Error;

/// Базовые значения римских цифр.
const DIGITS: [(char, u64); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Сегменты для записи числа римскими цифрами, по убыванию.
const SEGMENTS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Ошибка разбора римского числа.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    /// Символ не является римской цифрой.
    #[error("'{symbol}' не является римской цифрой")]
    InvalidSymbol {
        /// Неизвестный символ.
        symbol: char,
        /// Позиция символа в строке (в байтах).
        index: usize,
    },
}

/// Система счисления операнда.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    /// Десятичные целые числа.
    Arabic,
    /// Римские числа.
    Roman,
}

impl NumeralSystem {
    /// Определяет систему счисления по составу символов.
    ///
    /// Строка считается римской, если все её символы — римские цифры.
    #[must_use]
    pub fn classify(s: &str) -> Self {
        if is_roman(s) { Self::Roman } else { Self::Arabic }
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => f.write_str("арабские"),
            Self::Roman => f.write_str("римские"),
        }
    }
}

/// Результат вычисления в системе счисления операндов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    /// Арабское число без ограничений на диапазон.
    Arabic(i64),
    /// Римское число, всегда больше нуля.
    Roman(u64),
}

impl Numeral {
    /// Система счисления значения.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        match self {
            Self::Arabic(_) => NumeralSystem::Arabic,
            Self::Roman(_) => NumeralSystem::Roman,
        }
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic(n) => write!(f, "{n}"),
            Self::Roman(n) => f.write_str(&to_roman(*n)),
        }
    }
}

fn digit_value(symbol: char) -> Option<u64> {
    DIGITS
        .iter()
        .find(|&&(digit, _)| digit == symbol)
        .map(|&(_, value)| value)
}

/// Записывает число римскими цифрами.
///
/// Жадно вычитает наибольший подходящий сегмент, поэтому результат всегда
/// каноничен: `4` даёт `IV`, а не `IIII`. Для нуля возвращает пустую строку.
#[must_use]
pub fn to_roman(mut n: u64) -> String {
    let mut result = String::new();
    for &(value, segment) in &SEGMENTS {
        while n >= value {
            result.push_str(segment);
            n -= value;
        }
    }
    result
}

/// Разбирает римское число.
///
/// # Ошибки
///
/// Возвращает [`RomanError::InvalidSymbol`] для первого (справа) символа,
/// не являющегося римской цифрой.
pub fn from_roman(s: &str) -> Result<u64, RomanError> {
    let mut total: u64 = 0;
    let mut last = 0;

    for (index, symbol) in s.char_indices().rev() {
        let value = digit_value(symbol).ok_or(RomanError::InvalidSymbol { symbol, index })?;
        // Вычитаемые цифры строго убывают, их сумма меньше последней
        // прибавленной цифры, поэтому total не уходит в минус.
        if value < last {
            total -= value;
        } else {
            total += value;
        }
        last = value;
    }

    Ok(total)
}

/// Проверяет, что все символы строки — римские цифры.
#[must_use]
pub fn is_roman(s: &str) -> bool {
    s.chars().all(|c| digit_value(c).is_some())
}

/// Проверяет, что строка — каноническая запись римского числа.
///
/// ```
/// use roman_calculator_rs::numeral::is_canonical_roman;
///
/// assert!(is_canonical_roman("IX"));
/// assert!(!is_canonical_roman("VIIII"));
/// ```
#[must_use]
pub fn is_canonical_roman(s: &str) -> bool {
    match from_roman(s) {
        Ok(0) | Err(_) => false,
        Ok(n) => to_roman(n) == s,
    }
}
