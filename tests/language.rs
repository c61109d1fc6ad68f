use std::fs::{self};

use radixcalc::{
    calculate,
    error::ParseErrorKind,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        options::{Config, IntWordSize, Radix},
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_session(&code) {
                panic!("Example {} in {:?} failed:\n{}\n{}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```radixcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Evaluates every line in one session and returns the rendering of the last
/// line, or the report of the first failing line.
fn run_session(src: &str) -> Result<String, String> {
    let mut context = Context::default();
    let mut last = String::new();
    for line in src.lines() {
        last = match context.evaluate(line).map_err(|e| e.to_string())? {
            Evaluation::Value(value) => context.render(&value),
            _ => String::new(),
        };
    }
    Ok(last)
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(run_session(src), Ok(expected.to_string()), "input: {src:?}");
}

fn assert_error(src: &str, report: &str) {
    assert_eq!(run_session(src), Err(report.to_string()), "input: {src:?}");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("1 + 2 * 3", "7");
    assert_output("(1 + 2) * 3", "9");
    assert_output("7 / 2", "3");
    assert_output("-7 / 2", "-3");
    assert_output("-7 % 3", "-1");
    assert_output("7.0 / 2", "3.5");
    assert_output("2 ^ 3 ^ 2", "512");
    assert_output("-2 ^ 2", "4");
    assert_output("-4!", "-24");
    assert_output("1 << 2 + 1", "8");
    assert_output("1 | 2 & 3", "3");
    assert_output("0.1 + 0.2", "0.3");
}

#[test]
fn factorial_family() {
    assert_output("5!", "120");
    assert_output("0!", "1");
    assert_output("7!!", "105");
    assert_output("10!!!", "280");
    assert_output("5.0!", "120");
    assert_output("3!!", "3");
    assert_error("(-1)!", "Error: factorial requires a non-negative integer.");
    assert_error("2.5!", "Error: factorial requires a non-negative integer.");
}

#[test]
fn large_factorials_stay_bounded() {
    assert_output("#w128 4000000000!", "0");
    assert_output("#w128 4000000000!!", "0");
    assert_output("#w64 0du20!", "2432902008176640000");
    assert_output("#w64 0du66!", "0");
    assert_output("#w8 6!", "-48");
    assert_output("#w8 1000000!", "0");
    assert_output("#pr5 1000.0!", "4.0239e+2567");
    assert_output("#pr12 200000.0!! / (2.0 ^ 100000 * 100000.0!)", "1");
    assert_output("(5 + 0i)!", "120");
    assert!(run_session("1e9!").is_ok());
}

#[test]
fn integers_wrap_to_the_word_size() {
    assert_output("#w8 127 + 1", "-128");
    assert_output("#w8 0du255 + 1", "0");
    assert_output("#w8 2 ^ 7", "-128");
    assert_output("#w64 0du0 - 1", "18446744073709551615");
    assert_output("2 ^ 127", "-170141183460469231731687303715884105728");
    assert_output("2 ^ 100", "1267650600228229401496703205376");
    assert_output("#w16 #ox 0xffff", "-1");
    assert_output("#w16 #ox 0xuffff", "ffff");
}

#[test]
fn variables_are_rewrapped_when_read() {
    assert_output("x = 300\n#w8\nx", "44");
    assert_output("x = 300\n#w8\n#w128\nx", "300");
}

#[test]
fn assignment_and_variables() {
    assert_output("x = 5\nx * 2", "10");
    assert_output("a = b = 3\na + b", "6");
    assert_output("x = 2\nx = x ^ 10\nx", "1024");
    assert_error("pi = 3", "Error: reserved identifier.");
    assert_error("sqrt = 3", "Error: reserved identifier.");
    assert_error("y + 1", "Error: unknown identifier.");
}

#[test]
fn delete_removes_variables() {
    assert_error("x = 1\ndelete x\nx", "Error: unknown identifier.");
    assert_error("delete x", "Error: unknown identifier.");
    assert_error("x = 1\ndelete x + 1", "Error: end expected.");

    let mut context = Context::default();
    context.evaluate("x = 1").unwrap();
    assert_eq!(context.evaluate("delete x").unwrap(), Evaluation::Deleted);
    assert!(context.variables.is_empty());
}

#[test]
fn failing_lines_change_nothing() {
    let mut context = Context::default();
    context.evaluate("x = 1").unwrap();
    assert!(context.evaluate("x = 2 + (").is_err());
    assert_eq!(context.variable("x"), Some(Value::Int(1)));

    assert!(context.evaluate("#ox #w8 1 +").is_err());
    assert_eq!(context.config().output_radix, Radix::Decimal);
    assert_eq!(context.word_size(), IntWordSize::Bits128);
    assert_eq!(context.options.counts.output_radix, 0);
}

#[test]
fn error_reports() {
    assert_error("1 +", "Error: number expected.");
    assert_error("(1 + 2", "Error: \")\" expected.");
    assert_error("1 2", "Error: end expected.");
    assert_error("1 $ 2", "Error: invalid character.");
    assert_error("* 2", "Error: unexpected token.");
    assert_error("0x", "Error: malformed number.");
    assert_error("#zz 1", "Error: invalid option.");
    assert_error("1 / 0", "Error: division by zero.");
    assert_error("1.5 % 0.0", "Error: division by zero.");
    assert_error("0 ^ -1", "Error: division by zero.");
    assert_error("1.5 & 1", "Error: integer operand required.");
    assert_error("~1.5", "Error: integer operand required.");
    assert_error("1 << 0.5", "Error: whole number required.");
    assert_error("(1 + i) % 2", "Error: invalid operand.");
    assert_error("sin 1", "Error: \"(\" expected.");
    assert_error("help 1", "Error: end expected.");
    assert_error("help = 3", "Error: reserved identifier.");
    assert_error("delete = 3", "Error: reserved identifier.");
}

#[test]
fn error_kinds_are_exposed() {
    let err = calculate("1 % 0", Config::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DivisionByZero);
    assert_eq!(err.expected, None);
}

#[test]
fn shifts_and_bitwise() {
    assert_output("1 << 4", "16");
    assert_output("-16 >> 2", "-4");
    assert_output("3 >> -2", "12");
    assert_output("#w8 1 << 8", "0");
    assert_output("#w8 -1 >> 100", "-1");
    assert_output("1.5 << 2", "6");
    assert_output("6 & 3", "2");
    assert_output("6 | 3", "7");
    assert_output("6 ^| 3", "5");
    assert_output("~0", "-1");
    assert_output("#w8 ~0du0", "255");
}

#[test]
fn powers() {
    assert_output("2 ^ -1", "0");
    assert_output("-1 ^ -3", "-1");
    assert_output("2.0 ^ 10", "1024");
    assert_output("4 ^ 0.5", "2");
    assert_output("i ^ 2", "-1");
    assert_output("#pr10 e ^ 1", "2.718281828");
}

#[test]
fn literals_in_every_radix() {
    assert_output("0x10 + 0b11 + 0o7 + 0d9", "35");
    assert_output("#0x 1f", "31");
    assert_output("#0x 10 + 0d10", "26");
    assert_output("#mx 10 + 1", "11");
    assert_output("0x1.8p1", "3");
    assert_output("0x1f.8p-2", "7.875");
    assert_output("1e2", "100");
    assert_output("1.5e-1", "0.15");
    assert_output("1e400", "1e+400");
    assert_output("#0dn 5", "5");
    assert_error("#0x ff", "Error: unknown identifier.");
}

#[test]
fn complex_numbers() {
    assert_output("1 + 2i", "1+2i");
    assert_output("1 - i", "1-i");
    assert_output("2 - 3i", "2-3i");
    assert_output("i", "i");
    assert_output("-i", "-i");
    assert_output("i * i", "-1");
    assert_output("2i * 2i", "-4");
    assert_output("3i - 3i", "0");
    assert_output("(1 + 2i) * (3 - i)", "5+5i");
    assert_output("sqrt(-4)", "2i");
    assert_output("abs(3 + 4i)", "5");
    assert_output("norm(3 + 4i)", "25");
    assert_output("conj(1 + 2i)", "1-2i");
    assert_output("real(1 + 2i)", "1");
    assert_output("imag(1 + 2i)", "2");
    assert_output("#pr6 ln(-1)", "3.14159i");
}

#[test]
fn builtin_functions() {
    assert_output("sqrt(16)", "4");
    assert_output("sin(0)", "0");
    assert_output("#pr10 sqrt(2)", "1.414213562");
    assert_output("#pr10 pi", "3.141592654");
    assert_output("ln(1)", "0");
}

#[test]
fn decimal_output() {
    assert_output("#pr5 1.0 / 3", "0.33333");
    assert_output("#pr3 1234.5", "1.23e+03");
    assert_output("#pr6 0.00001", "1e-05");
    assert_output("#pr6 0.0001", "0.0001");
    assert_output("-0.0", "-0");
    assert_output("1e3", "1000");
}

#[test]
fn power_of_two_output() {
    assert_output("#ox 255", "ff");
    assert_output("#ox -255", "-ff");
    assert_output("#ob 5", "101");
    assert_output("#ox 0x12345", "1 2345");
    assert_output("#oo 8", "10");
    assert_output("#oo 4095", "7 777");
    assert_output("#ox 1.5", "1.8");
    assert_output("#ox -1.5", "-1.8");
    assert_output("#ox 0.5", "0.8");
    assert_output("#oo 0.5", "0.4");
    assert_output("#ob 0.75", "0.11");
    assert_output("#ox 256.0", "100");
    assert_output("#ox 0x123.4p0", "123.4");
    assert_output("#ox 0x1p-20", "1p-20");
    assert_output("#ox 0x1p-16", "0.0001");
    assert_output("#ox 3.0 + 4i", "3+4i");
}

#[test]
fn power_of_two_exponents_align_to_digits() {
    assert_output("#ox 0x1p-21", "8p-24");
    assert_output("#ox 0x1p-17", "8p-20");
    assert_output("#ox 0x1p-13", "0.0008");
    assert_output("#ox -0x1p-21", "-8p-24");
    assert_output("#oo 0x1p-7", "0.004");
    assert_output("#oo 0x1p-14", "2p-15");
    assert_output("#ob 0x1p-5", "1p-5");
    assert_output("#ob 0x1p-4", "0.0001");
}

#[test]
fn extreme_exponents_saturate() {
    assert_output("1.5e-9223372036854775808", "0");
    assert_output("1.5e-99999999999999999999", "0");
    assert_output("1.5e9223372036854775807", "inf");
    for literal in ["0x1.8p-9223372036854775808", "0o1.4p-9223372036854775808", "0b1.1p-9223372036854775808"] {
        assert!(run_session(literal).is_ok(), "{literal}");
    }
    assert_output("0x1.8p9223372036854775807", "inf");
    assert_output("2.0 ^ 1e300000000", "inf");
    assert_output("0.5 ^ 1e300000000", "0");
    assert_output("(-1.0) ^ 1e300000000", "1");
    assert_output("1 << 1e300000000", "inf");
    assert_error("1e300000000!", "Error: factorial requires a non-negative integer.");
}

#[test]
fn values_display_with_the_default_configuration() {
    assert_eq!(Value::Int(-255).to_string(), "-255");
    assert_eq!(calculate_value("#ox #pr3 1.0 / 3").to_string(), "0.333333");
}

#[test]
fn normalized_and_rounded_power_of_two_output() {
    assert_output("#ox #pn 3.0", "1.8p+1");
    assert_output("#ox #pn 1.0", "1p+0");
    assert_output("#ox #pn 0.5", "1p-1");
    assert_output("#ox #pn #pr2 1.0 / 3", "1.5p-2");
    assert_output("#ox #pn #pr1 1.9", "1p+1");
    assert_output("#ox #pr2 0x1.ff", "2");
}

#[test]
fn line_outcomes() {
    let mut context = Context::default();
    assert_eq!(context.evaluate("").unwrap(), Evaluation::Empty);
    assert_eq!(context.evaluate("   ").unwrap(), Evaluation::Empty);
    assert_eq!(context.evaluate("help").unwrap(), Evaluation::Help);
    assert_eq!(context.evaluate("#h").unwrap(), Evaluation::Help);
    assert_eq!(context.evaluate("##help").unwrap(), Evaluation::Help);
    assert_eq!(context.evaluate("#w8").unwrap(), Evaluation::Configured);
    assert_eq!(context.evaluate("#pr5 #pr7").unwrap(), Evaluation::Configured);

    assert_eq!(context.options.counts.help, 2);
    assert_eq!(context.options.counts.int_word_size, 1);
    assert_eq!(context.options.counts.precision, 2);
    assert_eq!(context.config().precision, 7);
}

#[test]
fn options_persist_between_lines() {
    assert_output("#mx\n10 + 1", "11");
    assert_output("#ox\n#0b\n101", "5");
    assert_output("#pn\n#ox\n3.0", "1.8p+1");
}

#[test]
fn one_shot_calculation() {
    let config = Config { output_radix: Radix::Binary,
                          ..Config::default() };
    assert_eq!(calculate("10", config).unwrap(), "1010");
    assert_eq!(calculate("x = 1", config).unwrap(), "1");
    assert_eq!(calculate("#w8", config).unwrap(), "");
}

#[test]
fn integers_round_trip_through_every_radix() {
    let radices = [(Radix::Binary, "0b"),
                   (Radix::Octal, "0o"),
                   (Radix::Decimal, "0d"),
                   (Radix::Hexadecimal, "0x")];
    let values = [0, 1, 255, 12_345, -98_765, i128::MAX, i128::MIN];

    for (radix, prefix) in radices {
        for value in values {
            let config = Config { output_radix: radix,
                                  ..Config::default() };
            let context = Context::new(radixcalc::interpreter::options::Options::new(config));
            let rendered = context.render(&Value::Int(value)).replace(' ', "");
            let (sign, digits) = match rendered.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("", rendered.as_str()),
            };

            let mut reader = Context::default();
            let parsed = reader.evaluate(&format!("{sign}{prefix}{digits}")).unwrap();
            assert_eq!(parsed, Evaluation::Value(Value::Int(value)), "{rendered} in {radix:?}");
        }
    }
}

#[test]
fn comparison_after_promotion() {
    let word = IntWordSize::Bits128;
    let real = calculate_value("2.0");
    let complex = calculate_value("2 + 0i");
    assert!(Value::Int(2).numeric_eq(&real, word));
    assert!(real.numeric_eq(&complex, word));
    assert!(!Value::Int(3).numeric_eq(&complex, word));
    assert!(Value::Int(-1).numeric_eq(&Value::UInt(255), IntWordSize::Bits8));
}

fn calculate_value(src: &str) -> Value {
    match Context::default().evaluate(src).unwrap() {
        Evaluation::Value(value) => value,
        other => panic!("{src:?} produced {other:?}"),
    }
}

#[test]
fn listed_properties() {
    assert_output("0 ^| 0", "0");
    assert_output("6!!", "48");
    assert_output("2 - i", "2-i");
    assert_output("0i", "0");
    assert_error("5 % 0", "Error: division by zero.");
    assert_error("5.0 / 0", "Error: division by zero.");
    assert_error("5i / 0", "Error: division by zero.");
    assert_error("0du5 % 0", "Error: division by zero.");
    assert_output("#ox #pn 0x123.4p0", "1.234p+8");
    assert_output("#ox 0x1.8p5", "30");
}

#[test]
fn malformed_precision_is_counted_but_ignored() {
    let mut context = Context::default();
    assert_eq!(context.evaluate("#pr12").unwrap(), Evaluation::Configured);
    assert_eq!(context.evaluate("#prx").unwrap(), Evaluation::Configured);
    assert_eq!(context.config().precision, 12);
    assert_eq!(context.options.counts.precision, 2);
    assert!(!context.options.other_args);
}
