use notatio::{
    EvalError, Token, VariableStore, evaluate, evaluate_postfix, format_tokens, to_postfix,
    to_prefix, tokenize,
};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).1
}

fn postfix_of(src: &str) -> String {
    format_tokens(&to_postfix(&tokens_of(src)))
}

fn prefix_of(src: &str) -> String {
    format_tokens(&to_prefix(&tokens_of(src)))
}

/// Evaluates `src` through both converters and checks they agree.
fn both_ways(src: &str, vars: &VariableStore) -> Result<i64, EvalError> {
    let tokens = tokens_of(src);
    let from_prefix = evaluate(&to_prefix(&tokens), None, &mut vars.clone());
    let from_postfix = evaluate_postfix(&to_postfix(&tokens), vars);
    assert_eq!(from_prefix, from_postfix, "prefix and postfix disagree on `{src}`");
    from_prefix
}

#[test]
fn tokenizer_splits_target_on_first_equals() {
    let (target, tokens) = tokenize("  total = a + b ");
    assert_eq!(target.as_deref(), Some("total"));
    assert_eq!(format_tokens(&tokens), "[a, +, b]");

    let (target, tokens) = tokenize("a + b");
    assert_eq!(target, None);
    assert_eq!(tokens.len(), 3);

    let (target, tokens) = tokenize("a = b = c");
    assert_eq!(target.as_deref(), Some("a"));
    assert_eq!(tokens,
               vec![Token::Ident("b".to_string()), Token::Op('='), Token::Ident("c".to_string())]);
}

#[test]
fn tokenizer_groups_alphanumeric_runs() {
    assert_eq!(tokenize("12+x3*(7)").1,
               vec![Token::Number(12),
                    Token::Op('+'),
                    Token::Ident("x3".to_string()),
                    Token::Op('*'),
                    Token::LParen,
                    Token::Number(7),
                    Token::RParen]);
    assert_eq!(tokenize("1 2").1, vec![Token::Number(1), Token::Number(2)]);
    assert_eq!(tokenize("4ever").1, vec![Token::Invalid("4ever".to_string())]);
    assert_eq!(tokenize("2 % é").1, vec![Token::Number(2), Token::Op('%'), Token::Op('é')]);
}

#[test]
fn tokenizer_skips_unicode_whitespace() {
    assert_eq!(tokenize("1\u{2003}+\u{000B}2\u{00A0}").1,
               vec![Token::Number(1), Token::Op('+'), Token::Number(2)]);

    let (target, tokens) = tokenize("n\u{3000}=\u{2003}(a\u{2009}*\u{000C}b)");
    assert_eq!(target.as_deref(), Some("n"));
    assert_eq!(format_tokens(&tokens), "[(, a, *, b, )]");
}

#[test]
fn tokenizer_handles_empty_input() {
    assert_eq!(tokenize(""), (None, Vec::new()));
    assert_eq!(tokenize(" \t "), (None, Vec::new()));
    assert_eq!(tokenize("x="), (Some("x".to_string()), Vec::new()));
}

#[test]
fn postfix_conversion() {
    assert_eq!(postfix_of("2 + 3 * 4"), "[2, 3, 4, *, +]");
    assert_eq!(postfix_of("(2 + 3) * 4"), "[2, 3, +, 4, *]");
    assert_eq!(postfix_of("a - b - c"), "[a, b, -, c, -]");
    assert_eq!(postfix_of("2 ^ 3 ^ 2"), "[2, 3, ^, 2, ^]");
    assert_eq!(postfix_of("a * (b + c) / d"), "[a, b, c, +, *, d, /]");
    assert_eq!(postfix_of(""), "[]");
}

#[test]
fn prefix_conversion() {
    assert_eq!(prefix_of("2 + 3 * 4"), "[+, 2, *, 3, 4]");
    assert_eq!(prefix_of("(2 + 3) * 4"), "[*, +, 2, 3, 4]");
    assert_eq!(prefix_of("a - b - c"), "[-, -, a, b, c]");
    assert_eq!(prefix_of("a / b"), "[/, a, b]");
    assert_eq!(prefix_of("a * (b + c) / d"), "[/, *, a, +, b, c, d]");
    assert_eq!(prefix_of(""), "[]");
}

#[test]
fn unknown_symbols_have_lowest_priority() {
    assert_eq!(postfix_of("1 + 2 % 3"), "[1, 2, +, 3, %]");
    assert_eq!(prefix_of("1 + 2 % 3"), "[%, +, 1, 2, 3]");
}

#[test]
fn postfix_is_pure() {
    let tokens = tokens_of("x = (a + b) * c ^ 2 - d");
    let snapshot = tokens.clone();

    let first = to_postfix(&tokens);
    let second = to_postfix(&tokens);

    assert_eq!(first, second);
    assert_eq!(tokens, snapshot);
}

#[test]
fn prefix_leaves_input_untouched() {
    let tokens = tokens_of("(a + b) * (c - d)");
    let snapshot = tokens.clone();

    let prefix = to_prefix(&tokens);
    assert_eq!(tokens, snapshot);
    // Postfix still sees the original order after the prefix conversion.
    assert_eq!(to_postfix(&tokens), to_postfix(&snapshot));
    assert_eq!(format_tokens(&prefix), "[*, +, a, b, -, c, d]");
}

#[test]
fn prefix_and_postfix_agree() {
    let mut vars = VariableStore::new();
    vars.assign("a", 17);
    vars.assign("b", 5);
    vars.assign("c", 3);

    let cases = [("a - b - c", 9),
                 ("a / b / c", 1),
                 ("a - (b - c)", 15),
                 ("a / (b - c)", 8),
                 ("(a + b) * (a - b)", 264),
                 ("a ^ 2 - b * c + 1", 275),
                 ("c ^ c ^ 2", 729),
                 ("((a))", 17),
                 ("a * b / c - a / b * c", 19),
                 ("2 * (3 + (4 - 1) * 2) ^ 2", 162)];

    for (src, expected) in cases {
        assert_eq!(both_ways(src, &vars), Ok(expected), "`{src}`");
    }
}

#[test]
fn fully_parenthesized_expressions_match_standard_arithmetic() {
    let vars = VariableStore::new();
    assert_eq!(both_ways("((8 - 3) - (2 - 1))", &vars), Ok(4));
    assert_eq!(both_ways("((100 / 5) / (12 / 3))", &vars), Ok(5));
    assert_eq!(both_ways("(2 ^ (1 + 2))", &vars), Ok(8));
    assert_eq!(both_ways("(((1 + 2) * (3 + 4)) - ((5 - 6) * 7))", &vars), Ok(28));
}

#[test]
fn errors_agree_between_evaluators() {
    let vars = VariableStore::new();
    assert_eq!(both_ways("6 / 0", &vars), Err(EvalError::DivisionByZero));
    assert_eq!(both_ways("q * 2", &vars), Err(EvalError::UndefinedVariable { name: "q".to_string() }));
    assert_eq!(both_ways("", &vars), Err(EvalError::MalformedExpression));
    assert_eq!(both_ways("1 2", &vars), Err(EvalError::MalformedExpression));
}

#[test]
fn division_by_zero_uses_prefix_operand_order() {
    let tokens = tokens_of("6 / 0");
    let prefix = to_prefix(&tokens);
    assert_eq!(prefix, vec![Token::Op('/'), Token::Number(6), Token::Number(0)]);
    assert_eq!(evaluate(&prefix, None, &mut VariableStore::new()),
               Err(EvalError::DivisionByZero));

    assert_eq!(evaluate(&to_prefix(&tokens_of("0 / 6")), None, &mut VariableStore::new()),
               Ok(0));
}

#[test]
fn evaluate_assigns_only_on_success() {
    let mut vars = VariableStore::new();
    vars.assign("x", 1);

    let prefix = to_prefix(&tokens_of("x / 0"));
    assert_eq!(evaluate(&prefix, Some("x"), &mut vars), Err(EvalError::DivisionByZero));
    assert_eq!(vars.get("x"), Some(1));

    let prefix = to_prefix(&tokens_of("x + 1"));
    assert_eq!(evaluate(&prefix, Some("x"), &mut vars), Ok(2));
    assert_eq!(vars.get("x"), Some(2));
}

#[test]
fn evaluate_rejects_extra_and_missing_operands() {
    let mut vars = VariableStore::new();
    let extra = [Token::Op('+'), Token::Number(1), Token::Number(2), Token::Number(3)];
    assert_eq!(evaluate(&extra, None, &mut vars), Err(EvalError::MalformedExpression));

    let missing = [Token::Op('+'), Token::Number(1)];
    assert_eq!(evaluate(&missing, None, &mut vars), Err(EvalError::MalformedExpression));

    assert_eq!(evaluate(&[], Some("x"), &mut vars), Err(EvalError::MalformedExpression));
    assert!(vars.is_empty());
}
