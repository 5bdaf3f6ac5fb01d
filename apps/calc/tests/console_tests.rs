//! Integration tests for the calc console, CLI commands and configuration.
//!
//! Console sessions are scripted through in-memory readers and writers.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use calc::cli::{Cli, Commands, cmd_eval, cmd_ops, cmd_repl};
use calc::{AppError, Config, Console};
use calc_core::{CalcError, CalculatorEngine, Operation, Registry, Selector};
use clap::Parser;
use std::io::Cursor;
use std::io::Write as _;
use std::sync::Mutex;

/// Mutex to serialize tests that modify the CALC_CONFIG env var.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Run a scripted console session and return everything it printed.
fn run_session(engine: &CalculatorEngine, script: &str) -> String {
    let mut output = Vec::new();
    Console::new(engine, Cursor::new(script.as_bytes()), &mut output)
        .quiet(true)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// CONSOLE SESSION TESTS
// =============================================================================

#[test]
fn test_console_addition_then_exit() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "1\n5\n3\n0\n");

    assert!(output.contains("RESULT"));
    assert!(output.contains("Addition: 5.0000 + 3.0000 = 8.0000"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_console_unary_operation_reads_one_operand() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "6\n16\n0\n");

    assert!(output.contains("Square Root: 16.0000 √ 0.0000 = 4.0000"));
    assert!(!output.contains("Enter second number"));
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_console_division_by_zero_continues() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "4\n10\n0\n1\n2\n2\n0\n");

    assert!(output.contains("Calculation error: Cannot divide 10.00 by zero"));
    assert!(output.contains("Addition: 2.0000 + 2.0000 = 4.0000"));
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_console_invalid_menu_input_reprompts() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "abc\n0\n");

    assert!(output.contains("Invalid input! Please enter a number."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_console_unknown_operation_code() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "9\n0\n");

    assert!(output.contains("Invalid operation code! Please try again."));
    assert!(engine.history().is_empty());
}

#[test]
fn test_console_invalid_operand_returns_to_menu() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "3\nfive\n0\n");

    assert!(output.contains("Invalid number format! Please enter a valid number."));
    assert!(engine.history().is_empty());
}

#[test]
fn test_console_history_view_and_clear() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "20\n1\n1\n1\n20\n21\n20\n0\n");

    assert_eq!(output.matches("History is empty. No calculations yet.").count(), 2);
    assert!(output.contains("CALCULATION HISTORY"));
    assert!(output.contains("Addition: 1.0000 + 1.0000 = 2.0000"));
    assert!(output.contains("Total: 1 calculation(s)"));
    assert!(output.contains("History cleared successfully!"));
    assert!(engine.history().is_empty());
}

#[test]
fn test_console_recent_count_limits_history_view() {
    let engine = CalculatorEngine::new();
    let mut output = Vec::new();
    Console::new(
        &engine,
        Cursor::new("1\n1\n1\n1\n2\n2\n20\n0\n".as_bytes()),
        &mut output,
    )
    .quiet(true)
    .with_recent_count(1)
    .run()
    .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Total: 1 calculation(s) (2 stored, capacity 100)"));
    assert!(output.contains("Addition: 2.0000 + 2.0000 = 4.0000"));
}

#[test]
fn test_console_end_of_input_exits() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "1\n5\n");

    assert!(output.contains("Goodbye!"));
    assert!(engine.history().is_empty());
}

#[test]
fn test_console_precision() {
    let engine = CalculatorEngine::new();
    let mut output = Vec::new();
    Console::new(&engine, Cursor::new("4\n1\n3\n0\n".as_bytes()), &mut output)
        .quiet(true)
        .with_precision(2)
        .run()
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Division: 1.00 / 3.00 = 0.33"));
}

#[test]
fn test_console_menu_lists_all_groups() {
    let engine = CalculatorEngine::new();
    let output = run_session(&engine, "0\n");

    assert!(output.contains("BASIC OPERATIONS"));
    assert!(output.contains("ADVANCED OPERATIONS"));
    assert!(output.contains("SCIENTIFIC OPERATIONS"));
    assert!(output.contains("14. Natural Logarithm (ln)"));
    assert!(output.contains(" 8. Percentage (b% of a)"));
    assert!(output.contains("20. View History"));
}

#[test]
fn test_console_refuses_registry_on_menu_code() {
    let registry = Registry::from_entries([
        (Selector(1), Operation::Addition),
        (Selector(20), Operation::Subtraction),
    ])
    .unwrap();
    let engine = CalculatorEngine::with_registry(registry, 10).unwrap();
    let mut output = Vec::new();
    let err = Console::new(&engine, Cursor::new("0\n".as_bytes()), &mut output)
        .run()
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("20"));
    assert!(output.is_empty());
}

#[test]
fn test_console_welcome_banner() {
    let engine = CalculatorEngine::new();
    let mut output = Vec::new();
    Console::new(&engine, Cursor::new("0\n".as_bytes()), &mut output)
        .run()
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains(&format!("CALC v{}", env!("CARGO_PKG_VERSION"))));
}

// =============================================================================
// CLI COMMAND TESTS
// =============================================================================

#[test]
fn test_cmd_eval_text() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_eval(&engine, &Config::default(), &mut out, false, 8, 150.0, Some(20.0)).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("Percentage: 150.0000 %of 20.0000 = 30.0000"));
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_cmd_eval_json() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_eval(&engine, &Config::default(), &mut out, true, 5, 2.0, Some(3.0)).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["result"], 8.0);
    assert_eq!(json["operation_name"], "Power");
    assert!(json["execution_time_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_cmd_eval_json_infinite() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_eval(&engine, &Config::default(), &mut out, true, 5, 10.0, Some(400.0)).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["result"], "inf");
    assert_eq!(json["operand1"], 10.0);
    assert_eq!(json["operand2"], 400.0);
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_cmd_eval_missing_b_defaults_to_zero() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_eval(&engine, &Config::default(), &mut out, false, 14, 1.0, None).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("= 0.0000"));
}

#[test]
fn test_cmd_eval_error_propagates() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    let result = cmd_eval(&engine, &Config::default(), &mut out, false, 99, 1.0, None);

    assert!(matches!(
        result,
        Err(AppError::Calc(CalcError::InvalidOperation(Selector(99))))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_cmd_ops_json_lists_twelve() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_ops(&engine, &mut out, true).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let ops = json.as_array().unwrap();

    assert_eq!(ops.len(), 12);
    assert_eq!(ops[0]["selector"], 1);
    assert_eq!(ops[0]["name"], "Addition");
    assert_eq!(ops[11]["selector"], 14);
    assert_eq!(ops[11]["unary"], true);
}

#[test]
fn test_cmd_ops_text() {
    let engine = CalculatorEngine::new();
    let mut out = Vec::new();
    cmd_ops(&engine, &mut out, false).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Available Operations"));
    assert!(out.contains("Modulus"));
    assert!(out.contains("Scientific"));
}

#[test]
fn test_cmd_repl_uses_config() {
    let engine = CalculatorEngine::new();
    let config = Config {
        precision: 1,
        ..Config::default()
    };
    let mut out = Vec::new();
    cmd_repl(
        &engine,
        &config,
        Cursor::new("3\n2\n4\n0\n".as_bytes()),
        &mut out,
        true,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Multiplication: 2.0 * 4.0 = 8.0"));
}

// =============================================================================
// CLI PARSING TESTS
// =============================================================================

#[test]
fn test_cli_parses_eval_with_negative_operands() {
    let cli = Cli::try_parse_from(["calc", "eval", "1", "-5", "-2.5"]).unwrap();
    match cli.command {
        Some(Commands::Eval { selector, a, b }) => {
            assert_eq!(selector, 1);
            assert_eq!(a, -5.0);
            assert_eq!(b, Some(-2.5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_cli_global_flags() {
    let cli =
        Cli::try_parse_from(["calc", "--json", "--history-size", "5", "-q", "ops"]).unwrap();
    assert!(cli.json_mode);
    assert!(cli.quiet);
    assert_eq!(cli.history_size, Some(5));
    assert!(matches!(cli.command, Some(Commands::Ops)));
}

#[test]
fn test_cli_defaults_to_no_command() {
    let cli = Cli::try_parse_from(["calc"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

// =============================================================================
// CONFIGURATION FILE TESTS
// =============================================================================

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_size = 7").unwrap();
    writeln!(file, "precision = 2").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.history_size, 7);
    assert_eq!(config.precision, 2);
    assert_eq!(config.recent_count, 0);
}

#[test]
fn test_config_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(matches!(
        Config::resolve(Some(&missing)),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_config_resolve_from_env() {
    let _guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_size = 3").unwrap();

    // SAFETY: Tests touching CALC_CONFIG run serialized under ENV_TEST_MUTEX.
    unsafe { std::env::set_var("CALC_CONFIG", file.path()) };
    let result = Config::resolve(None);
    // SAFETY: As above.
    unsafe { std::env::remove_var("CALC_CONFIG") };

    assert_eq!(result.unwrap().history_size, 3);
}

#[test]
fn test_config_drives_engine_capacity() {
    let config = Config::from_toml_str("history_size = 2").unwrap();
    let engine = CalculatorEngine::with_history_size(config.history_size).unwrap();
    for n in 0..4u32 {
        engine.calculate(Selector(1), f64::from(n), 0.0).unwrap();
    }
    assert_eq!(engine.history().size(), 2);
}
