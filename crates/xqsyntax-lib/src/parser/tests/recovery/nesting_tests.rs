use crate::ParseOptions;
use crate::diagnostics::DiagnosticKind;
use crate::parser::parse_with_options;
use crate::parser::tests::xpath;

#[test]
fn deep_nesting_is_cut_off() {
    let input = "((((1))))";
    let options = ParseOptions::new().with_recursion_limit(3);
    let parse = parse_with_options(input, xpath(), options);

    assert_eq!(parse.syntax().text().to_string(), input);
    let nesting: Vec<_> = parse
        .errors()
        .iter()
        .filter(|e| e.kind == DiagnosticKind::NestingTooDeep)
        .collect();
    assert_eq!(nesting.len(), 1);
    assert_eq!(nesting[0].code(), "XPDY0130");
    assert_eq!(nesting[0].range, rowan::TextRange::new(3.into(), 9.into()));
}

#[test]
fn nesting_within_limit_is_fine() {
    let input = "((((1))))";
    let options = ParseOptions::new().with_recursion_limit(8);
    assert!(parse_with_options(input, xpath(), options).is_valid());
}

#[test]
fn very_deep_input_does_not_overflow() {
    let depth = 10_000;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let parse = crate::parser::parse(&input, xpath());
    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().len(), rowan::TextSize::from(input.len() as u32));
}
