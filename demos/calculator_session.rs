//! Calculator Session
//!
//! This example walks through a calculator session backed by a history file.
//!
//! Key concepts:
//! - Left-to-right evaluation without operator precedence
//! - Divide-by-zero aborting a calculation without recording it
//! - Whole-history persistence after every successful calculation
//! - Reloading the history in a fresh session
//!
//! Run with: cargo run --example calculator_session

use calcbook::core::Operator;
use calcbook::session::{Calculator, SessionError};
use calcbook::store::{FileHistoryStore, Format, StoreConfigBuilder};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::temp_dir().join("calcbook-demo").join("history.json");
    let config = StoreConfigBuilder::new()
        .path(&path)
        .format(Format::Json)
        .build();

    println!("History file: {}", path.display());
    println!();

    let mut calculator = Calculator::open_or_empty(FileHistoryStore::new(config.clone()));
    println!(
        "Loaded {} earlier calculation(s)",
        calculator.history().len()
    );

    // 5 + 3 × 2 is (5 + 3) × 2 here
    calculator.push_operation(5.0, Operator::Add);
    calculator.push_operation(3.0, Operator::Multiply);
    let result = calculator.calculate(2.0)?;
    println!("5 + 3 × 2 = {}", result);

    calculator.push_operation(6.0, Operator::Divide);
    match calculator.calculate(0.0) {
        Err(SessionError::Evaluation(e)) => println!("6 ÷ 0 -> Error ({})", e),
        other => println!("6 ÷ 0 -> unexpected {:?}", other),
    }

    calculator.push_operation(1.5, Operator::Subtract);
    let result = calculator.calculate(0.25)?;
    println!("1.5 - 0.25 = {}", result);
    println!();

    // A fresh session sees everything that was persisted
    let reopened = Calculator::open(FileHistoryStore::new(config))?;
    println!("History (newest first):");
    for calculation in reopened.display_history() {
        println!(
            "  {}  {} = {}",
            calculation.timestamp.format("%d.%m.%Y %H:%M:%S"),
            calculation.expression,
            calculation.result
        );
    }

    Ok(())
}
