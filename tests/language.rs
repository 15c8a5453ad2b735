use std::{fs, path::Path};

use stackma::{
    Config,
    error::{RuntimeError, TokenizeError},
    get_output,
};
use walkdir::WalkDir;

#[test]
fn golden_programs_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.file_name()
                                           .to_str()
                                           .is_some_and(|name| name.starts_with("input-"))
                                      })
    {
        let input = entry.path();
        let expected_path = expected_path_for(input);

        let source =
            fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input:?}: {e}"));
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match get_output(&source, &Config::default()) {
            Ok(lines) => {
                let expected: Vec<&str> = expected.lines().collect();
                assert_eq!(lines, expected, "Program {input:?} produced the wrong stack");
            },
            Err(e) => panic!("Program {input:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn expected_path_for(input: &Path) -> std::path::PathBuf {
    let name = input.file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default()
                    .replacen("input-", "expected-", 1);
    input.with_file_name(name)
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_output(src, &Config::default()) {
        Ok(lines) => assert_eq!(lines, expected, "Unexpected stack for: {src}"),
        Err(e) => panic!("Program failed: {src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_output(src, &Config::default()).is_ok() {
        panic!("Program succeeded but was expected to fail: {src}")
    }
}

fn runtime_error(src: &str, config: &Config) -> RuntimeError {
    match get_output(src, config) {
        Ok(lines) => panic!("Program succeeded but was expected to fail: {src}\nStack: {lines:?}"),
        Err(e) => *e.downcast::<RuntimeError>()
                    .unwrap_or_else(|e| panic!("Expected a runtime error, got: {e}")),
    }
}

fn tokenize_error(src: &str) -> TokenizeError {
    match get_output(src, &Config::default()) {
        Ok(_) => panic!("Program succeeded but was expected to fail: {src}"),
        Err(e) => *e.downcast::<TokenizeError>()
                    .unwrap_or_else(|e| panic!("Expected a tokenize error, got: {e}")),
    }
}

#[test]
fn literals_are_pushed_in_order() {
    assert_output("1 2 3", &["1", "2", "3"]);
    assert_output("-4 1.5 -0.25 true false",
                  &["-4", "1.5", "-0.25", "true", "false"]);
    assert_output("\"hello world\" [1, 2] [[1, 2], [3, 4]]",
                  &["\"hello world\"", "[1, 2]", "[[1, 2], [3, 4]]"]);
    assert_output("1 2\n3", &["1", "2", "3"]);
    assert_output("", &[]);
}

#[test]
fn unknown_words_pass_through_as_strings() {
    assert_output("foo SWAPS x0", &["\"foo\"", "\"SWAPS\"", "\"x0\""]);
}

#[test]
fn integer_arithmetic() {
    assert_output("10 3 -", &["7"]);
    assert_output("3 4 + 2 *", &["14"]);
    assert_output("7 2 /", &["3"]);
    assert_output("-7 2 /", &["-4"]);
    assert_output("-7 2 %", &["1"]);
    assert_output("7 -2 %", &["-1"]);
    assert_output("2 10 **", &["1024"]);
    assert_output("2 -1 **", &["0.5"]);
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_output("1 2.5 +", &["3.5"]);
    assert_output("3.0 2 *", &["6.0"]);
    assert_output("7.5 2 %", &["1.5"]);
    assert_output("10.0 400 **", &["Infinity"]);
}

#[test]
fn arithmetic_faults() {
    assert!(matches!(runtime_error("1 0 /", &Config::default()),
                     RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("1.0 0 /", &Config::default()),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("5 0 %", &Config::default()),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("9223372036854775807 1 +", &Config::default()),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("99999999999999999999", &Config::default()),
                     RuntimeError::LiteralTooLarge { .. }));
    assert!(matches!(runtime_error("true 1 +", &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn integers_and_floats_compare_exactly() {
    assert_output("9007199254740993 1.5 <", &["false"]);
    assert_output("9007199254740993 9007199254740992.0 ==", &["false"]);
    assert_output("9007199254740993 9007199254740992.0 !=", &["true"]);
    assert_output("9007199254740993 9007199254740992.0 <=>", &["1"]);
    assert_output("9007199254740992.0 9007199254740993 <", &["true"]);
    assert_output("9007199254740992 9007199254740992.0 ==", &["true"]);
    assert_output("-3 -3.5 >", &["true"]);
}

#[test]
fn large_integers_promote_in_arithmetic() {
    assert_output("9007199254740993 1.5 +", &["9007199254740994.0"]);
}

#[test]
fn float_output_switches_to_exponent_form() {
    assert_output("1.0 100000 /", &["1.0e-05"]);
    assert_output("4611686018427387904 4.0 *", &["1.8446744073709552e+19"]);
    assert_output("0.0001 1000000000000000.0", &["0.0001", "1000000000000000.0"]);
    assert_output("0.5 0.5 -", &["0.0"]);
}

#[test]
fn string_concatenation() {
    assert_output("\"ab\" \"cd\" +", &["\"abcd\""]);
    assert_failure("\"ab\" \"cd\" -");
}

#[test]
fn comparisons() {
    assert_output("3 5 <", &["true"]);
    assert_output("3 5 >=", &["false"]);
    assert_output("5 3 <=>", &["1"]);
    assert_output("3 3 <=>", &["0"]);
    assert_output("2 3.5 <=>", &["-1"]);
    assert_output("1 1.0 ==", &["true"]);
    assert_output("1 2 !=", &["true"]);
    assert_output("\"a\" \"b\" <", &["true"]);
    assert_output("[1, 2] [1, 2] ==", &["true"]);
    assert_output("1 \"1\" ==", &["false"]);
    assert_failure("true 1 <");
    assert_failure("[1, 2] [1, 3] <");
}

#[test]
fn bitwise_and_logical_operators() {
    assert_output("6 3 &", &["2"]);
    assert_output("6 3 |", &["7"]);
    assert_output("6 3 ^", &["5"]);
    assert_output("1 4 <<", &["16"]);
    assert_output("16 2 >>", &["4"]);
    assert_output("16 -2 >>", &["64"]);
    assert_output("5 ~", &["-6"]);
    assert_output("true !", &["false"]);
    assert_output("true false ^", &["true"]);
    assert_output("true false &", &["false"]);

    assert!(matches!(runtime_error("1 !", &Config::default()),
                     RuntimeError::ExpectedBoolean { .. }));
    assert!(matches!(runtime_error("1 63 <<", &Config::default()),
                     RuntimeError::Overflow { .. }));
    assert_failure("1.5 ~");
}

#[test]
fn vector_operations() {
    assert_output("[1, 2, 3] [4, 5, 6] +", &["[5, 7, 9]"]);
    assert_output("[1, 2, 3] [4, 5, 6] -", &["[-3, -3, -3]"]);
    assert_output("[1, 2, 3] [4, 5, 6] *", &["32"]);
    assert_output("[1, 2] 3 *", &["[3, 6]"]);
    assert_output("3 [1, 2] *", &["[3, 6]"]);
    assert_output("[7, -7] 2 /", &["[3, -4]"]);
    assert_output("[1, 0, 0] [0, 1, 0] x", &["[0, 0, 1]"]);
    assert_output("[ 1 ,2 ]", &["[1, 2]"]);

    assert!(matches!(runtime_error("[1, 2] [1, 2, 3] +", &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[1, 2] [3, 4] x", &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
    assert_failure("[1, 2] 1.5 *");
}

#[test]
fn matrix_operations() {
    assert_output("[[1, 2], [3, 4]] [[5, 6], [7, 8]] *", &["[[19, 22], [43, 50]]"]);
    assert_output("[[1, 2], [3, 4]] [[5, 6], [7, 8]] +", &["[[6, 8], [10, 12]]"]);
    assert_output("[[1, 2], [3, 4]] [1, 1] *", &["[3, 7]"]);
    assert_output("[[1, 2], [3, 4]] 2 *", &["[[2, 4], [6, 8]]"]);
    assert_output("[[1, 2, 3], [4, 5, 6]] TRANSP", &["[[1, 4], [2, 5], [3, 6]]"]);
    assert_output("[[1, 1], [1, 0]] 10 **", &["[[89, 55], [55, 34]]"]);
    assert_output("[[1, 2], [3, 4]] 0 **", &["[[1, 0], [0, 1]]"]);
    assert_output("[[5, 6]]", &["[5, 6]"]);

    assert!(matches!(runtime_error("[[1, 2, 3], [4, 5, 6]] 2 **", &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[[1, 2], [3, 4]] -1 **", &Config::default()),
                     RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error("[[1, 2], [3, 4]] [[1, 2, 3], [4, 5, 6], [7, 8, 9]] *",
                                   &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[1, 2] TRANSP", &Config::default()),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn malformed_array_literals() {
    for src in ["[[1, 2], [3]]", "[1, x]", "[1]", "[]", "[[1, 2] [3, 4]]"] {
        assert!(matches!(runtime_error(src, &Config::default()),
                         RuntimeError::MalformedLiteral { .. }),
                "{src} should be malformed");
    }
}

#[test]
fn stack_shuffles() {
    assert_output("1 2 SWAP", &["2", "1"]);
    assert_output("1 2 DROP", &["1"]);
    assert_output("1 DUP", &["1", "1"]);
    assert_output("1 2 3 ROT", &["2", "3", "1"]);
    assert_output("1 2 3 4 3 ROLL", &["1", "3", "4", "2"]);
    assert_output("1 2 3 4 3 ROLLD", &["1", "4", "2", "3"]);
    assert_output("1 2 3 4 3 ROLL 3 ROLLD", &["1", "2", "3", "4"]);
    assert_output("1 2 SWAP SWAP", &["1", "2"]);
    assert_output("7 0 ROLL", &["7"]);
}

#[test]
fn stack_underflow_is_reported() {
    assert!(matches!(runtime_error("1 SWAP", &Config::default()),
                     RuntimeError::StackUnderflow { needed: 2,
                                                    found: 1,
                                                    .. }));
    assert!(matches!(runtime_error("DROP", &Config::default()),
                     RuntimeError::StackUnderflow { needed: 1,
                                                    found: 0,
                                                    .. }));
    assert!(matches!(runtime_error("1 +", &Config::default()),
                     RuntimeError::StackUnderflow { needed: 2,
                                                    found: 1,
                                                    .. }));
    assert!(matches!(runtime_error("true 5 IFELSE", &Config::default()),
                     RuntimeError::StackUnderflow { needed: 3,
                                                    found: 2,
                                                    .. }));
    assert!(matches!(runtime_error("1 2 5 ROLL", &Config::default()),
                     RuntimeError::StackUnderflow { .. }));
    assert!(matches!(runtime_error("1 2 \"3\" ROLL", &Config::default()),
                     RuntimeError::ExpectedInteger { .. }));
    assert!(matches!(runtime_error("1 -1 ROLL", &Config::default()),
                     RuntimeError::InvalidArgument { .. }));
}

#[test]
fn errors_carry_the_line_of_the_failing_token() {
    let error = runtime_error("1 2 +\n3\nDROP +", &Config::default());
    assert_eq!(error.line(), 3);
}

#[test]
fn if_else_selects_a_branch() {
    assert_output("true 5 10 IFELSE", &["5"]);
    assert_output("false 5 10 IFELSE", &["10"]);
    assert_output("3 4 < \"yes\" \"no\" IFELSE", &["\"yes\""]);

    assert!(matches!(runtime_error("1 5 10 IFELSE", &Config::default()),
                     RuntimeError::ExpectedBoolean { .. }));
    assert!(matches!(runtime_error("5 10 IFELSE", &Config::default()),
                     RuntimeError::StackUnderflow { .. }));
}

#[test]
fn quoted_symbols_wait_for_eval() {
    assert_output("'hello", &["hello"]);
    assert_output("3 'DUP", &["3", "DUP"]);
    assert_output("3 'DUP EVAL", &["3", "3"]);
    assert_output("2 3 '+ EVAL", &["5"]);
    assert_output("'5", &["5"]);
    assert_output("4 EVAL", &["4"]);
    assert_output("2 \"DUP\" EVAL", &["2", "2"]);
}

#[test]
fn lambdas_bind_arguments() {
    assert_output("3 4 {2 | x0 x1 +}", &["7"]);
    assert_output("10 3 {2 | x1 x0 -}", &["7"]);
    assert_output("10 3 {2 | x0 x1 -}", &["-7"]);
    assert_output("5 {1 | x0 x0 *}", &["25"]);
    assert_output("{0 | 1 2 +}", &["3"]);
    assert_output("{0|42}", &["42"]);
    assert_output("1 [1, 2] {1 | x0 [3, 4] +}", &["1", "[4, 6]"]);
    assert_output("3 4 {2 | x0 x1 +} EVAL", &["7"]);
}

#[test]
fn bound_symbols_and_lambdas_are_forced() {
    assert_output("3 'DUP {1 | x0}", &["3", "3"]);
    assert_output("2 3 '+ {1 | x0}", &["5"]);
    assert_output("{0 | 7 SELF} {1 | x0}", &["7", "7", "{0 | 7 SELF}"]);
    assert_output("[1, 2] 4.5 {2 | x1 x0}", &["[1, 2]", "4.5"]);
}

#[test]
fn lambda_failures() {
    assert!(matches!(runtime_error("1 {1 | x1}", &Config::default()),
                     RuntimeError::UnboundParameter { index: 1,
                                                      arity: 1,
                                                      .. }));
    assert!(matches!(runtime_error("{1 | x0}", &Config::default()),
                     RuntimeError::StackUnderflow { .. }));
    assert!(matches!(runtime_error("{ two | x0 }", &Config::default()),
                     RuntimeError::MalformedLiteral { .. }));
    assert!(matches!(runtime_error("1 {1 x0}", &Config::default()),
                     RuntimeError::MalformedLiteral { .. }));
    assert!(matches!(runtime_error("1 {1 | \"x}", &Config::default()),
                     RuntimeError::MalformedLiteral { .. }));
}

#[test]
fn lambdas_recurse_through_self() {
    assert_output("{0 | SELF}", &["{0 | SELF}"]);
    assert_output("3 {1 | x0 x0 1 - DUP 0 == 'DROP SELF IFELSE EVAL}",
                  &["3", "2", "1"]);
}

#[test]
fn runaway_recursion_is_bounded() {
    let config = Config::default().with_max_depth(32);

    assert!(matches!(runtime_error("{0 | SELF EVAL}", &config),
                     RuntimeError::RecursionLimit { limit: 32, .. }));
}

#[test]
fn stack_size_is_bounded() {
    let config = Config::default().with_max_stack_size(2);

    assert!(matches!(runtime_error("1 2 3", &config),
                     RuntimeError::StackOverflow { limit: 2, .. }));
    assert!(matches!(runtime_error("1 2 DUP", &config),
                     RuntimeError::StackOverflow { .. }));
}

#[test]
fn unterminated_literals_fail_before_evaluation() {
    assert_eq!(tokenize_error("1 2 +\n\"abc"),
               TokenizeError::UnterminatedString { line: 2 });
    assert_eq!(tokenize_error("[1, 2"), TokenizeError::UnterminatedBracket { line: 1 });
    assert_eq!(tokenize_error("DROP {1 | x0"),
               TokenizeError::UnterminatedLambda { line: 1 });
}
