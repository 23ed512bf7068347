use std::{error::Error, fs, rc::Rc};

use mosho::{
    ast::{BinaryOperator, Expr, FunctionDef, Literal, Program, Statement},
    error::{LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::Token,
        value::{
            core::{Outcome, Value},
            environment::Environment,
        },
    },
    parse, run_with, tokenize,
};
use walkdir::WalkDir;

/// Runs `src` in a fresh environment, capturing what `print` writes.
fn run(src: &str) -> (Result<Vec<Outcome>, Box<dyn Error>>, String) {
    let mut env = Environment::new();
    run_in(src, &mut env)
}

fn run_in(src: &str, env: &mut Environment) -> (Result<Vec<Outcome>, Box<dyn Error>>, String) {
    let mut evaluator = Evaluator::new(Vec::new());
    let result = run_with(&mut evaluator, src, env);
    let output = String::from_utf8(evaluator.into_output()).expect("print output is UTF-8");
    (result, output)
}

fn assert_success(src: &str) -> Vec<Outcome> {
    match run(src).0 {
        Ok(outcomes) => outcomes,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Box<dyn Error> {
    match run(src).0 {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let e = assert_failure(src);
    match e.downcast::<RuntimeError>() {
        Ok(e) => *e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
    }
}

/// Every value the script produced, rendered, in evaluation order.
fn printed_values(src: &str) -> Vec<String> {
    assert_success(src).iter()
                       .flat_map(Outcome::values)
                       .map(ToString::to_string)
                       .collect()
}

/// Collects the `# expect: <line>` comments of a script into the output it
/// should print.
fn expected_output(script: &str) -> String {
    script.lines()
          .filter_map(|line| line.trim_start().strip_prefix("# expect: "))
          .map(|line| format!("{line}\n"))
          .collect()
}

fn last_number(src: &str) -> f64 {
    let outcome = assert_success(src).pop().expect("script produced no outcome");
    match outcome.into_value() {
        Some(Value::Number(n)) => n,
        other => panic!("Expected a number, got {other:?}"),
    }
}

#[test]
fn scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mosho"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (result, output) = run(&content);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{content}\nError: {e}");
        }
        assert_eq!(output, expected_output(&content), "Output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn tokenize_simple_assignment() {
    let tokens: Vec<Token> = tokenize("x = 3").unwrap().into_iter().map(|(t, _)| t).collect();

    assert_eq!(tokens,
               vec![Token::Variable("x".into()),
                    Token::Assign,
                    Token::Number(3.0),
                    Token::EndOfInput]);
}

#[test]
fn tokenize_keywords_and_operators() {
    let tokens: Vec<Token> = tokenize("mosho f: a { if a <= 2 { a == 1 } }").unwrap()
                                                                            .into_iter()
                                                                            .map(|(t, _)| t)
                                                                            .collect();

    assert_eq!(tokens,
               vec![Token::Mosho,
                    Token::Variable("f".into()),
                    Token::Colon,
                    Token::Variable("a".into()),
                    Token::LBrace,
                    Token::If,
                    Token::Variable("a".into()),
                    Token::LessEqual,
                    Token::Number(2.0),
                    Token::LBrace,
                    Token::Variable("a".into()),
                    Token::EqualEqual,
                    Token::Number(1.0),
                    Token::RBrace,
                    Token::RBrace,
                    Token::EndOfInput]);
}

#[test]
fn tokenize_tracks_lines() {
    let tokens = tokenize("a\n\nb # trailing comment\nc").unwrap();
    let lines: Vec<(Token, usize)> =
        tokens.into_iter().filter(|(t, _)| *t != Token::NewLine).collect();

    assert_eq!(lines,
               vec![(Token::Variable("a".into()), 1),
                    (Token::Variable("b".into()), 3),
                    (Token::Variable("c".into()), 4),
                    (Token::EndOfInput, 4)]);
}

#[test]
fn tokenize_number_forms() {
    let tokens: Vec<Token> = tokenize("3 3. 3.25").unwrap().into_iter().map(|(t, _)| t).collect();

    assert_eq!(tokens,
               vec![Token::Number(3.0),
                    Token::Number(3.0),
                    Token::Number(3.25),
                    Token::EndOfInput]);
}

#[test]
fn tokenize_rejects_invalid_character() {
    assert_eq!(tokenize("x = 1\ny = 2 $ 3"),
               Err(LexError::InvalidCharacter { character: '$',
                                                line:      2,
                                                column:    7, }));
}

#[test]
fn tokenize_rejects_second_decimal_point() {
    assert_eq!(tokenize("1.2.3"),
               Err(LexError::InvalidCharacter { character: '.',
                                                line:      1,
                                                column:    4, }));
}

#[test]
fn parse_precedence_tree() {
    let program = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();

    let expected = Expr::Term { left:  Box::new(Expr::Literal { value: Literal::Number(1.0),
                                                                line:  1, }),
                                op:    BinaryOperator::Add,
                                right: Box::new(Expr::Factor { left:  Box::new(Expr::Literal { value: Literal::Number(2.0),
                                                                                                  line:  1, }),
                                                               op:    BinaryOperator::Mul,
                                                               right: Box::new(Expr::Literal { value: Literal::Number(3.0),
                                                                                                  line:  1, }),
                                                               line:  1, }),
                                line:  1, };

    assert_eq!(program,
               Program { body: vec![Statement::Expression { expr: expected,
                                                            line: 1, }], });
}

#[test]
fn parse_left_associative() {
    let program = parse(&tokenize("10 - 4 - 3").unwrap()).unwrap();
    let Statement::Expression { expr: Expr::Term { left, op, .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected a term, got {:?}", program.body[0]);
    };

    assert_eq!(*op, BinaryOperator::Sub);
    assert!(matches!(**left, Expr::Term { op: BinaryOperator::Sub, .. }));
}

#[test]
fn parse_function_definition() {
    let program = parse(&tokenize("mosho add: a b { a + b }").unwrap()).unwrap();
    let Statement::FunctionDefinition(def) = &program.body[0] else {
        panic!("Expected a function definition");
    };

    assert_eq!(def.name, "add");
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(def.body.len(), 1);
}

#[test]
fn parse_call_with_juxtaposed_arguments() {
    let program = parse(&tokenize("f(1 (2) x)").unwrap()).unwrap();
    let Statement::Expression { expr: Expr::FunctionCall { name, arguments, .. },
                                .. } = &program.body[0]
    else {
        panic!("Expected a call");
    };

    assert_eq!(name, "f");
    assert_eq!(arguments.len(), 3);
}

#[test]
fn parse_reports_missing_delimiter() {
    let tokens = tokenize("x = (1 + 2").unwrap();

    assert_eq!(parse(&tokens),
               Err(ParseError::UnexpectedEndOfInput { expected: "')'".into(),
                                                      line:     1, }));
}

#[test]
fn parse_reports_expected_and_found() {
    let err = parse(&tokenize("mosho 3: { }").unwrap()).unwrap_err();

    match err {
        ParseError::UnexpectedToken { expected, found, line } => {
            assert_eq!(expected, "function name");
            assert_eq!(found, "number 3.0");
            assert_eq!(line, 1);
        },
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn parse_requires_end_of_input() {
    let tokens = vec![(Token::Number(1.0), 1)];

    assert_eq!(parse(&tokens), Err(ParseError::MissingEndOfInput { line: 1 }));
}

#[test]
fn unfinished_body_is_incomplete() {
    let err = parse(&tokenize("while x < 3 {\n x = x + 1").unwrap()).unwrap_err();

    assert!(err.is_incomplete());
    assert!(!parse(&tokenize("x = )").unwrap()).unwrap_err().is_incomplete());
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(last_number("1 + 2 * 3"), 7.0);
    assert_eq!(last_number("(1 + 2) * 3"), 9.0);
    assert_eq!(last_number("10 - 4 - 3"), 3.0);
    assert_eq!(last_number("8 / 2 / 2"), 2.0);
    assert_eq!(last_number("1 + 1 == 2"), 1.0);
}

#[test]
fn comparisons_produce_one_or_zero() {
    assert_eq!(printed_values("3 > 2\n3 < 2\n2 >= 2\n2 <= 1\n4 == 4"),
               vec!["1.0", "0.0", "1.0", "0.0", "1.0"]);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(last_number("1 / 0"), f64::INFINITY);
    assert!(last_number("0 / 0").is_nan());
}

#[test]
fn assignment_persists() {
    assert_eq!(last_number("x = 5\ny = x * 2\ny + 1"), 11.0);
}

#[test]
fn assignment_produces_unit() {
    assert_eq!(assert_success("x = 5"), vec![Outcome::Unit]);
}

#[test]
fn environment_persists_between_runs() {
    let mut env = Environment::new();

    run_in("x = 5", &mut env).0.unwrap();
    let (result, _) = run_in("x + 1", &mut env);

    assert_eq!(result.unwrap(), vec![Outcome::from(6.0)]);
}

#[test]
fn bindings_before_an_error_remain() {
    let mut env = Environment::new();

    assert!(run_in("x = 1\ny = z", &mut env).0.is_err());
    assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    assert!(!env.contains("y"));
}

#[test]
fn if_truthiness() {
    assert_eq!(printed_values("if 1 { 10 }"), vec!["10.0"]);
    assert_eq!(printed_values("if 0 { 10 }"), Vec::<String>::new());
    assert_eq!(printed_values("if 0 - 2 { 10 }"), vec!["10.0"]);
    assert_eq!(printed_values("if 0 / 0 { 10 }"), vec!["10.0"]);
}

#[test]
fn if_produces_body_sequence() {
    let outcomes = assert_success("if 1 { x = 2 x 3 }");

    assert_eq!(outcomes,
               vec![Outcome::Sequence(vec![Outcome::Unit, 2.0.into(), 3.0.into()])]);
}

#[test]
fn untaken_if_is_unit() {
    assert_eq!(assert_success("if 2 < 1 { 3 }"), vec![Outcome::Unit]);
}

#[test]
fn while_loop_counts() {
    assert_eq!(last_number("i = 0\ns = 0\nwhile i < 5 {\n  i = i + 1\n  s = s + i\n}\ns"),
               15.0);
}

#[test]
fn while_produces_unit() {
    assert_eq!(assert_success("while 0 { 1 }"), vec![Outcome::Unit]);
}

#[test]
fn recursive_factorial() {
    let src = "mosho fact: n {\n  r = 1\n  if n > 1 { r = n * fact(n - 1) }\n  r\n}\nfact(4)";

    assert_eq!(last_number(src), 24.0);
}

#[test]
fn function_returns_last_outcome() {
    assert_eq!(last_number("mosho add: a b { a + b }\nadd(2 3)"), 5.0);
    assert_eq!(last_number("mosho double: x { if x > 0 { x * 2 } }\ndouble(3)"), 6.0);
}

#[test]
fn empty_function_body_is_unit() {
    assert_eq!(assert_success("mosho nothing: { }\nnothing()"),
               vec![Outcome::Unit, Outcome::Unit]);
}

#[test]
fn unit_function_result_as_operand_fails() {
    assert!(matches!(runtime_error("mosho nothing: { }\nnothing() + 1"),
                     RuntimeError::MissingValue { line: 2 }));
}

#[test]
fn arity_mismatch() {
    assert!(matches!(runtime_error("mosho add: a b { a + b }\nadd(1)"),
                     RuntimeError::ArityMismatch { expected: 2,
                                                   found: 1,
                                                   line: 2,
                                                   .. }));
}

#[test]
fn arity_mismatch_one_parameter() {
    assert!(matches!(runtime_error("mosho f: a { a }\nf(1 2)"),
                     RuntimeError::ArityMismatch { expected: 1,
                                                   found: 2,
                                                   .. }));
    assert!(matches!(runtime_error("mosho f: a { a }\nf()"),
                     RuntimeError::ArityMismatch { expected: 1,
                                                   found: 0,
                                                   .. }));
}

#[test]
fn operand_errors_carry_operand_line() {
    assert!(matches!(runtime_error("mosho f: { 1 }\nx = (1 +\n f)"),
                     RuntimeError::ExpectedNumber { line: 3 }));
    assert!(matches!(runtime_error("a = 1\nb = a\n* missing"),
                     RuntimeError::UndefinedName { line: 3, .. }));
}

#[test]
fn undefined_name() {
    assert!(matches!(runtime_error("y = x + 1"),
                     RuntimeError::UndefinedName { ref name, line: 1 } if name == "x"));
    assert!(matches!(runtime_error("missing(1)"),
                     RuntimeError::UndefinedName { ref name, .. } if name == "missing"));
}

#[test]
fn calling_a_number_fails() {
    assert!(matches!(runtime_error("x = 1\nx(2)"),
                     RuntimeError::NotCallable { ref name, line: 2 } if name == "x"));
}

#[test]
fn function_as_operand_fails() {
    assert!(matches!(runtime_error("mosho f: { 1 }\nf + 1"),
                     RuntimeError::ExpectedNumber { line: 2 }));
}

#[test]
fn functions_are_first_class() {
    assert_eq!(last_number("mosho inc: x { x + 1 }\ng = inc\ng(1)"), 2.0);
    assert_eq!(printed_values("mosho inc: x { x + 1 }\ninc"), vec!["<function inc>"]);
}

#[test]
fn functions_do_not_see_caller_variables() {
    assert!(matches!(runtime_error("y = 10\nmosho f: x { x + y }\nf(1)"),
                     RuntimeError::UndefinedName { ref name, .. } if name == "y"));
}

#[test]
fn functions_see_caller_functions() {
    let src = "mosho one: { 1 }\nmosho two: { one() + one() }\ntwo()";

    assert_eq!(last_number(src), 2.0);
}

#[test]
fn function_bindings_do_not_leak() {
    let mut env = Environment::new();

    run_in("x = 1\nmosho f: a { x = a * 10 x }\nf(5)", &mut env).0.unwrap();

    assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    assert!(!env.contains("a"));
}

#[test]
fn print_writes_each_argument() {
    let (result, output) = run("x = 2\nprint(x x * 3 (1 + 1))");

    assert_eq!(result.unwrap(), vec![Outcome::Unit, Outcome::Unit]);
    assert_eq!(output, "2.0\n6.0\n2.0\n");
}

#[test]
fn print_keeps_earlier_output_on_failure() {
    let (result, output) = run("print(1 missing)");

    assert!(result.is_err());
    assert_eq!(output, "1.0\n");
}

#[test]
fn print_cannot_be_shadowed() {
    let (result, output) = run("mosho print: x { 0 }\nprint(4)");

    assert!(result.is_ok());
    assert_eq!(output, "4.0\n");
}

#[test]
fn recursion_limit() {
    let e = runtime_error("mosho forever: n { forever(n + 1) }\nforever(0)");

    assert!(matches!(e, RuntimeError::RecursionLimit { limit: 200, .. }));
}

#[test]
fn recursion_limit_is_configurable() {
    let mut evaluator = Evaluator::new(Vec::new()).with_max_call_depth(3);
    let mut env = Environment::new();
    let src = "mosho down: n { r = 0 if n > 0 { r = down(n - 1) } r }";

    run_with(&mut evaluator, src, &mut env).unwrap();

    assert!(run_with(&mut evaluator, "down(2)", &mut env).is_ok());
    assert!(run_with(&mut evaluator, "down(3)", &mut env).is_err());
}

#[test]
fn parsing_is_idempotent() {
    let src = "mosho fact: n {\n  r = 1\n  if n > 1 { r = n * fact(n - 1) }\n  r\n}\n\
               i = 0\nwhile i < 3 { print(fact(i) i) i = i + 1 }";

    let first = parse(&tokenize(src).unwrap()).unwrap();
    let second = parse(&tokenize(src).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.body.len(), 3);
}

#[test]
fn evaluation_is_idempotent() {
    let src = "mosho sq: x { x * x }\na = sq(3)\na + 1";
    let tokens = tokenize(src).unwrap();
    let program = parse(&tokens).unwrap();

    let mut first_env = Environment::new();
    let mut second_env = Environment::new();
    let first = evaluate(&program, &mut first_env).unwrap();
    let second = evaluate(&program, &mut second_env).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_env, second_env);
}

#[test]
fn evaluate_hand_built_tree() {
    let def = Rc::new(FunctionDef { name:   "id".into(),
                                    params: vec!["v".into()],
                                    body:   vec![Statement::Expression { expr: Expr::Literal { value: "v".into(),
                                                                                                line:  1, },
                                                                         line: 1, }],
                                    line:   1, });
    let call = Expr::FunctionCall { name:      "id".into(),
                                    arguments: vec![Expr::Literal { value: 9.0.into(),
                                                                    line:  2, }],
                                    line:      2, };
    let program = Program { body: vec![Statement::FunctionDefinition(def),
                                       Statement::Expression { expr: call, line: 2 }], };

    let mut evaluator = Evaluator::new(Vec::new());
    let mut env = Environment::new();

    assert_eq!(evaluator.eval_program(&program, &mut env).unwrap(),
               vec![Outcome::Unit, 9.0.into()]);
}

#[test]
fn error_messages_carry_line() {
    let e = assert_failure("x = 1\n\ny = nope");

    assert_eq!(e.to_string(), "Error on line 3: Undefined name 'nope'.");
}
