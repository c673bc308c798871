use reckon::{
    ast::{BinaryOperator, Expression, Operand, Operation},
    error::{
        ClassificationError, EvaluationError, ExpressionError, OperationError, TokenizationError,
    },
    interpreter::{
        evaluator::core::{Context, OverflowMode, evaluate},
        lexer::{Glyph, classify},
        parser::{
            expression::build_expression,
            operation::{MAX_NESTING, build_operations},
        },
        tokenizer::{Token, tokenize},
        value::core::Number,
    },
};

fn tokens_of(src: &str) -> Vec<(Token, usize)> {
    tokenize(&classify(src).unwrap(), OverflowMode::Promote).unwrap()
}

fn tree_of(src: &str) -> Expression {
    build_expression(&build_operations(&tokens_of(src)).unwrap()).unwrap()
}

#[test]
fn classification_yields_one_glyph_per_code_point() {
    let glyphs = classify("1.5 +\u{a0}(-2)*/").unwrap();

    assert_eq!(glyphs,
               vec![Glyph::Digit('1'),
                    Glyph::DecimalSeparator,
                    Glyph::Digit('5'),
                    Glyph::Whitespace,
                    Glyph::Plus,
                    Glyph::Whitespace,
                    Glyph::LParen,
                    Glyph::Minus,
                    Glyph::Digit('2'),
                    Glyph::RParen,
                    Glyph::Star,
                    Glyph::Slash]);
}

#[test]
fn classification_is_repeatable() {
    let source = " 12 * (3 - .5) ";
    assert_eq!(classify(source), classify(source));
}

#[test]
fn classification_reports_code_point_positions() {
    assert_eq!(classify("é + x"),
               Err(ClassificationError::UnrecognizedSymbol { symbol: 'é', position: 0 }));
    assert_eq!(classify("1 + x"),
               Err(ClassificationError::UnrecognizedSymbol { symbol: 'x', position: 4 }));
    assert_eq!(classify("ü1x"),
               Err(ClassificationError::UnrecognizedSymbol { symbol: 'ü', position: 0 }));
    assert_eq!(classify("1ü"),
               Err(ClassificationError::UnrecognizedSymbol { symbol: 'ü', position: 1 }));
}

#[test]
fn single_code_point_classification_matches_text_classification() {
    for (position, symbol) in "0123456789.+-*/() \t".chars().enumerate() {
        assert_eq!(Glyph::of(symbol, position).map(|g| vec![g]),
                   classify(&symbol.to_string()));
    }
    assert_eq!(Glyph::of('x', 5),
               Err(ClassificationError::UnrecognizedSymbol { symbol: 'x', position: 5 }));
}

#[test]
fn minus_after_an_operand_is_subtraction() {
    assert_eq!(tokens_of("(1)-2"),
               vec![(Token::LParen { negated: false }, 0),
                    (Token::Number(Number::Integer(1)), 1),
                    (Token::RParen, 2),
                    (Token::Subtract, 3),
                    (Token::Number(Number::Integer(2)), 4)]);
}

#[test]
fn minus_elsewhere_is_folded_into_the_next_token() {
    assert_eq!(tokens_of("-1 * -(2)"),
               vec![(Token::Number(Number::Integer(-1)), 0),
                    (Token::Multiply, 3),
                    (Token::LParen { negated: true }, 6),
                    (Token::Number(Number::Integer(2)), 7),
                    (Token::RParen, 8)]);
    assert_eq!(tokens_of("(- 2.5)"),
               vec![(Token::LParen { negated: false }, 0),
                    (Token::Number(Number::Real(-2.5)), 1),
                    (Token::RParen, 6)]);
}

#[test]
fn literal_starting_with_a_separator_takes_the_pending_minus() {
    assert_eq!(tokens_of("3 * -.5"),
               vec![(Token::Number(Number::Integer(3)), 0),
                    (Token::Multiply, 2),
                    (Token::Number(Number::Real(-0.5)), 4)]);
}

#[test]
fn tokenizer_drops_whitespace() {
    let tokens = tokens_of("  1   +\t2  ");
    assert_eq!(tokens,
               vec![(Token::Number(Number::Integer(1)), 2),
                    (Token::Add, 6),
                    (Token::Number(Number::Integer(2)), 8)]);
}

#[test]
fn tokenizer_rejects_malformed_numbers() {
    let tokenize_src = |src: &str| tokenize(&classify(src).unwrap(), OverflowMode::Promote);

    assert_eq!(tokenize_src("1.2.3"), Err(TokenizationError::MalformedNumber { position: 3 }));
    assert_eq!(tokenize_src("1 + ."), Err(TokenizationError::MalformedNumber { position: 4 }));
    assert_eq!(tokenize_src("-."), Err(TokenizationError::MalformedNumber { position: 0 }));
    assert_eq!(tokenize(&classify("99999999999999999999").unwrap(), OverflowMode::Fail),
               Err(TokenizationError::LiteralTooLarge { position: 0 }));
}

fn number(value: i64, position: usize) -> Operation {
    Operation::Operand(Operand::Number { value: Number::Integer(value),
                                         position })
}

fn operator(op: BinaryOperator, position: usize) -> Operation {
    Operation::Operator { op, position }
}

fn group(operations: Vec<Operation>, negated: bool, position: usize) -> Operation {
    Operation::Operand(Operand::Group { operations,
                                        negated,
                                        position })
}

#[test]
fn operations_nest_by_parentheses_only() {
    let operations = build_operations(&tokens_of("1 * -(2 + (3))")).unwrap();

    let inner = group(vec![number(3, 11)], false, 10);
    let outer = group(vec![number(2, 6), operator(BinaryOperator::Add, 8), inner], true, 5);
    assert_eq!(operations,
               vec![number(1, 0), operator(BinaryOperator::Mul, 2), outer]);
}

#[test]
fn operation_builder_does_not_check_alternation() {
    assert!(build_operations(&tokens_of("+ + 1 2")).is_ok());
}

#[test]
fn unmatched_parentheses_are_located() {
    assert_eq!(build_operations(&tokens_of("(1 + (2)")),
               Err(OperationError::UnmatchedParenthesis { symbol: '(', position: 0 }));
    assert_eq!(build_operations(&tokens_of("1) + (2")),
               Err(OperationError::UnmatchedParenthesis { symbol: ')', position: 1 }));
}

#[test]
fn nesting_beyond_the_limit_is_rejected_at_its_parenthesis() {
    let depth = MAX_NESTING + 1;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(build_operations(&tokens_of(&src)),
               Err(OperationError::NestingTooDeep { position: MAX_NESTING }));
}

#[test]
fn trees_encode_precedence_and_associativity() {
    assert_eq!(tree_of("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
    assert_eq!(tree_of("10 - 2 - 3").to_string(), "((10 - 2) - 3)");
    assert_eq!(tree_of("8 / 4 / 2 * 3").to_string(), "(((8 / 4) / 2) * 3)");
    assert_eq!(tree_of("1 - 2 * 3 + 4 / 5").to_string(), "((1 - (2 * 3)) + (4 / 5))");
    assert_eq!(tree_of("(1 + 2) * 3").to_string(), "((1 + 2) * 3)");
    assert_eq!(tree_of("-(1 - 2)").to_string(), "(-1 * (1 - 2))");
}

#[test]
fn finished_trees_never_contain_the_placeholder() {
    for src in ["1", "1 + 2 * 3 - 4 / 5", "-((1)) * (2 - -(3 + 4))"] {
        assert!(!tree_of(src).contains_empty(), "{src}");
    }
}

#[test]
fn expression_builder_validates_alternation() {
    let build = |src: &str| build_expression(&build_operations(&tokens_of(src)).unwrap());

    assert_eq!(build("1 +"), Err(ExpressionError::MissingOperand { position: 2 }));
    assert_eq!(build("* 1"), Err(ExpressionError::MissingOperand { position: 0 }));
    assert_eq!(build("1 + / 2"), Err(ExpressionError::MissingOperand { position: 4 }));
    assert_eq!(build("1 (2)"), Err(ExpressionError::MissingOperator { position: 2 }));
    assert_eq!(build("(1) + ()"), Err(ExpressionError::EmptyExpression { position: Some(6) }));
    assert_eq!(build(""), Err(ExpressionError::EmptyExpression { position: None }));
}

#[test]
fn evaluation_of_the_placeholder_is_an_internal_error() {
    assert_eq!(evaluate(&Expression::Empty), Err(EvaluationError::MalformedTree));

    let partial = Expression::binary(BinaryOperator::Add,
                                     Expression::Number(Number::Integer(1)),
                                     Expression::Empty,
                                     2);
    assert_eq!(evaluate(&partial), Err(EvaluationError::MalformedTree));
}

#[test]
fn evaluation_checks_the_divisor_after_promotion() {
    let tree = tree_of("1.5 / (2 - 2)");
    assert_eq!(evaluate(&tree), Err(EvaluationError::DivisionByZero { position: 4 }));
}

#[test]
fn integer_overflow_follows_the_context() {
    let tree = tree_of("9223372036854775807 * 2");

    assert_eq!(Context::new().evaluate(&tree),
               Ok(Number::Real(18_446_744_073_709_551_616.0)));
    assert_eq!(Context::new().with_overflow(OverflowMode::Fail).evaluate(&tree),
               Err(EvaluationError::IntegerOverflow { position: 20 }));
}

#[test]
fn long_chains_collapse_left_to_right() {
    let tree = tree_of(&vec!["1 - 2 * 3"; 50_000].join(" + "));

    assert!(!tree.contains_empty());
    assert_eq!(evaluate(&tree), Ok(Number::Integer(-5 * 50_000)));
    assert!(tree.to_string().starts_with(&format!("{}(1 - (2 * 3))", "(".repeat(99_998))));
}

#[test]
fn deep_trees_are_walked_and_dropped_without_recursion() {
    let one = || Expression::Number(Number::Integer(1));

    let mut left_deep = one();
    let mut right_deep = one();
    for position in 0..500_000 {
        left_deep = Expression::binary(BinaryOperator::Add, left_deep, one(), position);
        right_deep = Expression::binary(BinaryOperator::Sub, one(), right_deep, position);
    }

    assert!(!left_deep.contains_empty());
    assert_eq!(evaluate(&left_deep), Ok(Number::Integer(500_001)));
    assert_eq!(evaluate(&right_deep), Ok(Number::Integer(1)));
    assert!(right_deep.to_string().ends_with(&")".repeat(500_000)));

    drop(left_deep);
    drop(right_deep);
}
