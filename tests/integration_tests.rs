//! Интеграционные тесты калькулятора.
//!
//! Тестируют публичный API библиотеки через `evaluate` и `run_with`.

use roman_calculator_rs::expression::EvalError;
use roman_calculator_rs::numeral::NumeralSystem;
use roman_calculator_rs::parser::ParseError;
use roman_calculator_rs::{CalcError, Config, evaluate, evaluate_with, run_with};

fn eval(input: &str) -> String {
    evaluate(input)
        .unwrap_or_else(|e| panic!("ошибка для '{input}': {e}"))
        .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Арабские числа
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn arabic_operations() {
    assert_eq!(eval("1 + 1"), "2");
    assert_eq!(eval("9 - 4"), "5");
    assert_eq!(eval("3 * 4"), "12");
    assert_eq!(eval("7 / 3"), "2"); // целочисленное деление
}

#[test]
fn arabic_result_is_not_limited() {
    assert_eq!(eval("10 * 10"), "100");
    assert_eq!(eval("10 + 10"), "20");
    assert_eq!(eval("3 - 3"), "0");
    assert_eq!(eval("1 / 10"), "0");
}

// ─────────────────────────────────────────────────────────────────────────────
// Римские числа
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roman_operations() {
    assert_eq!(eval("I + I"), "II");
    assert_eq!(eval("IX - IV"), "V");
    assert_eq!(eval("VI * VII"), "XLII");
    assert_eq!(eval("X / III"), "III");
}

#[test]
fn roman_results_above_ten() {
    assert_eq!(eval("X * X"), "C");
    assert_eq!(eval("IX * IX"), "LXXXI");
    assert_eq!(eval("X + IX"), "XIX");
}

#[test]
fn roman_operands_are_lenient() {
    assert_eq!(eval("IIII + I"), "V");
    assert_eq!(eval("VX * II"), "X");
}

// ─────────────────────────────────────────────────────────────────────────────
// Обработка ошибок
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn error_format() {
    assert!(matches!(
        evaluate("2 +"),
        Err(CalcError::Parse(ParseError::Format { found: 2 }))
    ));
    assert!(matches!(
        evaluate("   "),
        Err(CalcError::Parse(ParseError::Format { found: 0 }))
    ));
    assert!(matches!(
        evaluate("1 + 2 + 3"),
        Err(CalcError::Parse(ParseError::Format { .. }))
    ));
}

#[test]
fn error_invalid_operator() {
    assert!(matches!(
        evaluate("1 ^ 2"),
        Err(CalcError::Parse(ParseError::InvalidOperator { .. }))
    ));
}

#[test]
fn error_mixed_systems() {
    assert!(matches!(
        evaluate("II + 2"),
        Err(CalcError::Parse(ParseError::MixedSystems { .. }))
    ));
    assert!(matches!(
        evaluate("3 * V"),
        Err(CalcError::Parse(ParseError::MixedSystems { .. }))
    ));
}

#[test]
fn error_not_a_number() {
    assert!(matches!(
        evaluate("one + two"),
        Err(CalcError::Parse(ParseError::NotANumber { .. }))
    ));
}

#[test]
fn error_out_of_range_in_both_systems() {
    for input in ["0 + 1", "1 + 11", "11 * 2"] {
        assert!(
            matches!(
                evaluate(input),
                Err(CalcError::Parse(ParseError::OutOfRange {
                    system: NumeralSystem::Arabic,
                    ..
                }))
            ),
            "ввод: '{input}'"
        );
    }
    for input in ["XI + I", "I + XX", "IIIIIIIIIII - I"] {
        assert!(
            matches!(
                evaluate(input),
                Err(CalcError::Parse(ParseError::OutOfRange {
                    system: NumeralSystem::Roman,
                    ..
                }))
            ),
            "ввод: '{input}'"
        );
    }
}

#[test]
fn error_negative_operand() {
    assert!(matches!(
        evaluate("II - V"),
        Err(CalcError::Eval(EvalError::NegativeOperand { left: 2, right: 5 }))
    ));
    assert!(matches!(
        evaluate("2 - 5"),
        Err(CalcError::Eval(EvalError::NegativeOperand { .. }))
    ));
}

#[test]
fn error_non_positive_roman_result() {
    assert!(matches!(
        evaluate("V - V"),
        Err(CalcError::Eval(EvalError::NonPositiveResult(0)))
    ));
    assert!(matches!(
        evaluate("III / X"),
        Err(CalcError::Eval(EvalError::NonPositiveResult(0)))
    ));
}

#[test]
fn strict_mode() {
    let config = Config {
        strict: true,
        ..Config::default()
    };
    assert!(matches!(
        evaluate_with("IIII + I", &config),
        Err(CalcError::Parse(ParseError::MalformedNumeral { .. }))
    ));
    assert_eq!(evaluate_with("IV + I", &config).unwrap().to_string(), "V");
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        evaluate("V - V").unwrap_err().to_string(),
        "в римской системе нет числа 0: результат должен быть положительным"
    );
    assert_eq!(
        evaluate("1 % 2").unwrap_err().to_string(),
        "неизвестный оператор '%'"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Интерактивный режим
// ─────────────────────────────────────────────────────────────────────────────

fn session(input: &str) -> String {
    let config = Config {
        prompt: false,
        ..Config::default()
    };
    let mut output = Vec::new();
    run_with(input.as_bytes(), &mut output, &config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn session_survives_errors() {
    let out = session("X / III\n5 / 0\nV - V\n10 * 10\n");
    let lines: Vec<&str> = out.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(
        lines,
        vec![
            "III",
            "Ошибка: число 0 вне диапазона: арабские числа должны быть от 1 до 10",
            "Ошибка: в римской системе нет числа 0: результат должен быть положительным",
            "100",
        ]
    );
}

#[test]
fn session_ends_at_end_of_input() {
    assert_eq!(session(""), "");
    assert_eq!(session("1 + 1"), "2\n");
}
