//! Вычисление проверенного выражения `A OP B`.
//!
//! Операнды уже приведены к целым числам, система счисления общая для обоих.
//! Результат возвращается в той же системе: римский — только положительный,
//! арабский — без ограничений на диапазон.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::expression::{BinaryOp, Expression};
//! use roman_calculator_rs::numeral::{Numeral, NumeralSystem};
//!
//! let e = Expression::new(10, BinaryOp::Div, 3, NumeralSystem::Roman);
//! assert_eq!(e.evaluate(), Ok(Numeral::Roman(3)));
//!
//! let e = Expression::new(10, BinaryOp::Mul, 10, NumeralSystem::Arabic);
//! assert_eq!(e.evaluate(), Ok(Numeral::Arabic(100)));
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::numeral::{Numeral, NumeralSystem};

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Уменьшаемое меньше вычитаемого.
    #[error("вычитание {left} - {right} даёт отрицательное число")]
    NegativeOperand {
        /// Уменьшаемое.
        left: i64,
        /// Вычитаемое.
        right: i64,
    },
    /// Деление на ноль.
    #[error("деление на ноль")]
    DivisionByZero,
    /// Римский результат не больше нуля.
    #[error("в римской системе нет числа {0}: результат должен быть положительным")]
    NonPositiveResult(i64),
    /// Целочисленное переполнение.
    #[error("переполнение")]
    Overflow,
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление с отбрасыванием остатка.
    Div,
}

impl BinaryOp {
    /// Операция по её символу.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Символ операции.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить бинарную операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::NegativeOperand`] если при вычитании `left < right`.
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => {
                if left < right {
                    Err(EvalError::NegativeOperand { left, right })
                } else {
                    left.checked_sub(right).ok_or(EvalError::Overflow)
                }
            }
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Выражение из двух операндов одной системы счисления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Левый операнд.
    pub left: i64,
    /// Операция.
    pub op: BinaryOp,
    /// Правый операнд.
    pub right: i64,
    /// Система счисления операндов и результата.
    pub system: NumeralSystem,
}

impl Expression {
    /// Создать выражение.
    #[must_use]
    pub const fn new(left: i64, op: BinaryOp, right: i64, system: NumeralSystem) -> Self {
        Self {
            left,
            op,
            right,
            system,
        }
    }

    /// Вычислить значение выражения.
    ///
    /// # Ошибки
    ///
    /// Ошибки [`BinaryOp::apply`], а для римской системы ещё
    /// [`EvalError::NonPositiveResult`], если результат не больше нуля.
    pub fn evaluate(&self) -> Result<Numeral, EvalError> {
        let value = self.op.apply(self.left, self.right)?;

        match self.system {
            NumeralSystem::Arabic => Ok(Numeral::Arabic(value)),
            NumeralSystem::Roman => u64::try_from(value)
                .ok()
                .filter(|&n| n > 0)
                .map(Numeral::Roman)
                .ok_or(EvalError::NonPositiveResult(value)),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} ({})", self.left, self.op, self.right, self.system)
    }
}
