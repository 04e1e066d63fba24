use crate::delimit::*;
use crate::parser::cst::SyntaxKind::{self, *};

#[test]
fn literal_then_name_requires_space() {
    assert_eq!(
        space_requirement(IntegerLiteral, NCName),
        SpaceRequirement::Required
    );
}

#[test]
fn literal_then_variable_indicator_is_optional() {
    assert_eq!(
        space_requirement(IntegerLiteral, Dollar),
        SpaceRequirement::Optional
    );
}

#[test]
fn name_then_dot_requires_space() {
    assert_eq!(space_requirement(NCName, Dot), SpaceRequirement::Required);
    assert_eq!(space_requirement(NCName, DotDot), SpaceRequirement::Required);
}

#[test]
fn keywords_are_non_delimiting() {
    assert_eq!(space_requirement(KwDiv, IntegerLiteral), SpaceRequirement::Required);
    assert_eq!(space_requirement(IntegerLiteral, KwDiv), SpaceRequirement::Required);
    assert_eq!(space_requirement(KwReturn, NCName), SpaceRequirement::Required);
    assert_eq!(space_requirement(KwFor, Dollar), SpaceRequirement::Optional);
}

#[test]
fn dot_and_numeric_literal_in_both_orders() {
    assert_eq!(space_requirement(DecimalLiteral, Dot), SpaceRequirement::Required);
    assert_eq!(space_requirement(Dot, IntegerLiteral), SpaceRequirement::Required);
    assert_eq!(space_requirement(DotDot, DoubleLiteral), SpaceRequirement::Required);
}

#[test]
fn hyphen_after_name_but_not_before() {
    assert_eq!(space_requirement(NCName, Minus), SpaceRequirement::Required);
    assert_eq!(space_requirement(KwDiv, Minus), SpaceRequirement::Required);
    assert_eq!(space_requirement(Minus, NCName), SpaceRequirement::Optional);
    assert_eq!(space_requirement(IntegerLiteral, Minus), SpaceRequirement::Optional);
}

#[test]
fn punctuation_pairs_are_optional() {
    assert_eq!(space_requirement(ParenOpen, ParenClose), SpaceRequirement::Optional);
    assert_eq!(space_requirement(Slash, Slash), SpaceRequirement::Optional);
    assert_eq!(space_requirement(Dot, NCName), SpaceRequirement::Optional);
}

#[test]
fn total_over_token_pairs() {
    let tokens: Vec<SyntaxKind> = SyntaxKind::tokens().collect();
    let mut required = 0;
    for &left in &tokens {
        for &right in &tokens {
            if space_requirement(left, right) == SpaceRequirement::Required {
                required += 1;
                assert!(
                    left.is_non_delimiting() || matches!(left, Dot | DotDot),
                    "{left:?} {right:?}"
                );
            }
        }
    }
    assert!(required > 0);
}

#[test]
fn display() {
    insta::assert_snapshot!(SpaceRequirement::Required.to_string(), @"required");
    insta::assert_snapshot!(SpaceRequirement::Optional.to_string(), @"optional");
}

#[test]
fn kinds_by_name() {
    assert_eq!(
        space_requirement_by_name("IntegerLiteral", "KwDiv").unwrap(),
        SpaceRequirement::Required
    );
    assert_eq!(
        space_requirement_by_name("Minus", "NCName").unwrap(),
        SpaceRequirement::Optional
    );
}

#[test]
fn unknown_kind_name_is_an_error() {
    let err = space_requirement_by_name("Integer", "Dot").unwrap_err();
    assert_eq!(err.to_string(), "unknown token kind `Integer`");
}

#[test]
fn node_kinds_are_not_token_names() {
    assert!(space_requirement_by_name("Root", "Dot").is_err());
}
