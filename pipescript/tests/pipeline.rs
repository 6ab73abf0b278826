//! End-to-end: source text in, JavaScript out.

use pipescript::error::{CompileError, LexicalError, SyntaxError};
use pipescript::{compile, parse_tokens, tokenize};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::multiplicative("1 + 2 * 3", "1 + 2 * 3;")]
#[case::relational("1 + 2 > 3", "1 + 2 > 3;")]
#[case::assignment("a >> 1 + 2;", "a = 1 + 2;")]
#[case::equality("a == b;", "a === b;")]
#[case::member_chain("a.b.c;", "a.b.c;")]
#[case::pipe("a -> f;", "f(a);")]
#[case::bare_pipe("-> f;", "f();")]
#[case::prefix_minus("-a + 1;", "-a + 1;")]
#[case::subtraction("a - 1;", "a - 1;")]
#[case::not("flag >> !true;", "flag = !true;")]
#[case::definition("def a >> 1;", "let a = 1;")]
#[case::decimal("def pi >> 3.14;", "let pi = 3.14;")]
#[case::string("def s >> \"héllo\";", "let s = \"héllo\";")]
#[case::block("{ def a >> 1; }", "{let a = 1;}")]
#[case::compact_block("{a>>1;}", "{a = 1;}")]
#[case::block_then_statement("{ a >> 1; } b >> 2;", "{a = 1;}b = 2;")]
#[case::comments("a >> 1; # set a\n#$ and\nthen $# b >> 2;", "a = 1;b = 2;")]
#[case::pipe_across_statements("a >> 1; -> f;", "f(a = 1);")]
#[case::dot_across_statements("a; .b;", "a.b;")]
#[case::pipe_block("{ a; } -> f;", "f({a;});")]
#[case::empty("", "")]
fn test_compile(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(compile(source).unwrap(), expected);
}

#[test]
fn test_pipe_into_console() {
    insta::assert_snapshot!(
        compile("def x >> 1; x -> console.log; \"done\" -> console.log;").unwrap(),
        @r#"let x = 1;console.log(x);console.log("done");"#
    );
}

#[test]
fn test_nested_blocks() {
    insta::assert_snapshot!(
        compile("{ def a >> 1; { a >> a * 2; } a -> print; }").unwrap(),
        @"{let a = 1;{a = a * 2;}print(a);}"
    );
}

#[test]
fn test_unmatched_open_brace_is_syntax_error() {
    let err = compile("{ a >> 1;").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Syntax(SyntaxError::MissingClosingBrace { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Syntax error: Missing '}' for the '{' at line 1, column 1"
    );
}

#[test]
fn test_unterminated_string_fails_before_parsing() {
    assert!(matches!(
        compile("a >> \"oops"),
        Err(CompileError::Lexical(LexicalError::UnterminatedString { .. }))
    ));
}

#[test]
fn test_missing_names_surface_at_generation() {
    assert!(matches!(
        compile("def;"),
        Err(CompileError::Syntax(SyntaxError::MissingIdentifier { after: "def" }))
    ));
    assert!(matches!(
        compile("a.;"),
        Err(CompileError::Syntax(SyntaxError::MissingIdentifier { after: "." }))
    ));
}

#[test]
fn test_ast_serializes_to_json() {
    let program = pipescript::parser::parse("def a >> 1;").unwrap();
    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["statements"][0]["Assignment"]["value"]["NumberLiteral"], "1");
}

const WORDS: &[&str] = &[
    "a", "b", "1", "2.5", "\"s\"", "true", "def", "+", "-", "*", "/", ">", "<", "==", ">>",
    "->", ".", "!", ";", ",", "(", ")", "{", "}",
];

proptest! {
    #[test]
    fn test_tokenize_never_panics(source in "\\PC*") {
        let _ = tokenize(&source);
    }

    #[test]
    fn test_pipeline_never_panics(words in prop::collection::vec(prop::sample::select(WORDS), 0..40)) {
        let source = words.join(" ");
        let tokens = tokenize(&source).unwrap();
        if let Ok(program) = parse_tokens(&tokens) {
            let _ = pipescript::generate(&program.into());
        }
    }
}
