use proptest::prelude::*;
use stackma::{
    Config, get_result,
    interpreter::{
        evaluator::binary::comparison::{compare_numbers, values_equal},
        tokenizer::tokenize,
        value::core::Value,
    },
    util::num::compare_i64_f64,
};

fn run(src: &str) -> Vec<Value> {
    get_result(src, &Config::default()).unwrap_or_else(|e| panic!("Program failed: {src}\nError: {e}"))
}

fn program(values: &[i64]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn pure_pushes_produce_the_pushed_values(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let expected: Vec<Value> = values.iter().copied().map(Value::Integer).collect();
        prop_assert_eq!(run(&program(&values)), expected);
    }

    #[test]
    fn dup_drop_is_a_no_op(values in prop::collection::vec(any::<i64>(), 1..16)) {
        let src = program(&values);
        prop_assert_eq!(run(&format!("{src} DUP DROP")), run(&src));
    }

    #[test]
    fn swap_swap_restores_the_top(values in prop::collection::vec(any::<i64>(), 2..16)) {
        let src = program(&values);
        prop_assert_eq!(run(&format!("{src} SWAP SWAP")), run(&src));
    }

    #[test]
    fn roll_then_rolld_restores_the_order(values in prop::collection::vec(any::<i64>(), 1..16),
                                          pick in any::<prop::sample::Index>()) {
        let n = pick.index(values.len() + 1);
        let src = program(&values);
        prop_assert_eq!(run(&format!("{src} {n} ROLL {n} ROLLD")), run(&src));
    }

    #[test]
    fn floor_division_identity(a in -1_000_000i64..1_000_000, b in -1000i64..1000) {
        prop_assume!(b != 0);
        let quotient = run(&format!("{a} {b} /"));
        let remainder = run(&format!("{a} {b} %"));

        match (quotient.as_slice(), remainder.as_slice()) {
            ([Value::Integer(q)], [Value::Integer(r)]) => {
                prop_assert_eq!(q * b + r, a);
                prop_assert!(*r == 0 || (*r < 0) == (b < 0));
            },
            other => prop_assert!(false, "unexpected results {:?}", other),
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn integer_float_comparison_is_exact(a in any::<i64>(), b in any::<i64>()) {
        let float = b as f64;
        let exact = i128::from(a).cmp(&(float as i128));
        prop_assert_eq!(compare_i64_f64(a, float), exact);
    }

    #[test]
    fn equality_agrees_with_ordering(a in any::<i64>(), b in any::<f64>()) {
        let (int, float) = (Value::Integer(a), Value::Float(b));
        let ordering = compare_numbers(&int, &float);

        prop_assert_eq!(values_equal(&int, &float), ordering.is_some_and(|o| o.is_eq()));
        prop_assert_eq!(compare_numbers(&float, &int), ordering.map(std::cmp::Ordering::reverse));
    }

    #[test]
    fn tokenizer_never_panics(source in "\\PC*") {
        let _ = tokenize(&source);
    }

    #[test]
    fn arbitrary_programs_never_panic(source in "[0-9a-zA-Z+*/%<=>!~'\"\\[\\]{}|, \n-]{0,64}") {
        let config = Config::default().with_max_depth(16).with_max_stack_size(256);
        let _ = get_result(&source, &config);
    }
}
