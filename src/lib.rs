//! # roman_calculator_rs
//!
//! Консольный калькулятор выражений вида `A OP B` над арабскими
//! или римскими числами.
//!
//! Поддерживает:
//! - Операнды от 1 до 10 (от I до X), обе в одной системе счисления
//! - Бинарные операции: `+`, `-`, `*`, `/` (деление целочисленное)
//! - Ответ в той же системе счисления, что и операнды
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator_rs::evaluate;
//!
//! assert_eq!(evaluate("2 + 2").unwrap().to_string(), "4");
//! assert_eq!(evaluate("VI * VII").unwrap().to_string(), "XLII");
//! ```

pub mod expression;
pub mod numeral;
pub mod parser;
pub mod token;

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::numeral::Numeral;

/// Приглашение к вводу выражения.
pub const PROMPT: &str = "Введите выражение (например, 2 + 2 или II + II): ";

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора выражения.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления.
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

impl CalcError {
    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Настройки калькулятора.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Принимать только каноническую запись римских чисел.
    pub strict: bool,
    /// Выводить приглашение перед каждым вводом.
    pub prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            prompt: true,
        }
    }
}

/// Вычисляет строковое выражение и возвращает результат.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
///
/// # Примеры
///
/// ```
/// use roman_calculator_rs::evaluate;
///
/// assert_eq!(evaluate("X / III").unwrap().to_string(), "III");
/// assert_eq!(evaluate("10 * 10").unwrap().to_string(), "100");
/// assert!(evaluate("II + 2").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Numeral, CalcError> {
    evaluate_with(input, &Config::default())
}

/// Вычисляет выражение с заданными настройками.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
pub fn evaluate_with(input: &str, config: &Config) -> Result<Numeral, CalcError> {
    let expr = parser::Parser::new(input).strict(config.strict).parse()?;
    debug!("разобрано выражение: {expr}");
    let result = expr.evaluate()?;
    debug!("результат: {result} ({})", result.system());
    Ok(result)
}

/// Запускает интерактивный калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock(), config)
}

/// Цикл чтения и вычисления выражений.
///
/// Читает выражения построчно, выводит результат или ошибку и продолжает
/// работу. Для выхода введите `q`, `quit`, `exit` или закройте ввод (Ctrl+D).
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &Config,
) -> io::Result<()> {
    if config.prompt {
        writeln!(output, "Калькулятор. Введите выражение или 'q' для выхода.")?;
    }

    let mut line = String::new();
    loop {
        if config.prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("конец ввода");
            break;
        }
        let expr = line.trim();

        if expr.eq_ignore_ascii_case("q") || expr == "exit" || expr == "quit" {
            break;
        }

        if expr.is_empty() {
            continue;
        }

        match evaluate_with(expr, config) {
            Ok(result) => writeln!(output, "{result}")?,
            Err(e) => {
                debug!("ошибка для '{expr}': {e:?}");
                print_error_with_context(&mut output, expr, &e)?;
            }
        }
    }

    if config.prompt {
        writeln!(output)?;
        writeln!(output, "До свидания!")?;
    }
    Ok(())
}

/// Выводит ошибку с указанием позиции в исходной строке.
fn print_error_with_context<W: Write>(
    output: &mut W,
    input: &str,
    error: &CalcError,
) -> io::Result<()> {
    if let Some(pos) = error.position() {
        // Позиция в байтах, а указатель ставится по символам
        let column = input.get(..pos).map_or(pos, |prefix| prefix.chars().count());
        writeln!(output, "  {input}")?;
        writeln!(output, "  {}^", " ".repeat(column))?;
    }
    writeln!(output, "Ошибка: {error}")
}
