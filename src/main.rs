use std::process;

use clap::Parser;
use log::warn;
use roman_calculator_rs::{Config, evaluate_with, run};

/// Калькулятор выражений `A OP B` над арабскими (1..10) или римскими (I..X) числами.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Принимать только каноническую запись римских чисел (IV, но не IIII).
    #[arg(short, long)]
    strict: bool,

    /// Не выводить приглашение к вводу.
    #[arg(short = 'q', long)]
    no_prompt: bool,

    /// Вычислить одно выражение и выйти, например "VI / II".
    expression: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config {
        strict: args.strict,
        prompt: !args.no_prompt,
    };

    if let Some(expression) = args.expression {
        match evaluate_with(&expression, &config) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("Ошибка: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&config) {
        warn!("ошибка ввода-вывода: {e}");
        eprintln!("Ошибка: {e}");
        process::exit(1);
    }
}
