//! Totality, round-trip, determinism and dialect gating over generated input.

use proptest::prelude::*;

use crate::dialect::{DialectConfig, Vendor, Version};
use crate::parser::{SyntaxKind, parse};

const FRAGMENTS: &[&str] = &[
    "1", "2.5", ".5e3", "0x1F", "'s'", "\"d\"", "$x", "a", "p:b", "Q{u}c", "*", ".", "..", "@",
    "/", "//", "::", "child", "(", ")", "[", "]", "{", "}", ",", ";", ":=", ":", "?", "!", "=>",
    "=!>", "->", "+", "-", "=", "<", ">", "<=", "|", "||", "#", "%", "`", "``[", "]``", "`{",
    "}`", "(:", ":)", "(#", "#)", "<a>", "</a>", "<a/>", "<!--", "-->", "<?", "?>", "&lt;",
    "for", "let", "in", "return", "if", "then", "else", "some", "satisfies", "map", "array",
    "function", "instance", "of", "as", "cast", "treat", "to", "or", "and", "div", "declare",
    "variable", "module", "namespace", "import", "xquery", "version", "element", "text",
    "switch", "case", "default", "typeswitch", "try", "catch", "order", "by", "where", "group",
    "record", "enum", "otherwise", "orElse", "^", "\u{FFFE}", "\n",
];

fn fragment_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(FRAGMENTS), prop::bool::ANY),
        0..24,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, spaced)| {
                if spaced {
                    format!("{fragment} ")
                } else {
                    fragment.to_string()
                }
            })
            .collect()
    })
}

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![fragment_soup(), ".{0,40}"]
}

fn any_dialect() -> impl Strategy<Value = DialectConfig> {
    let versions = prop::sample::select(vec![
        Version::V1_0,
        Version::V2_0,
        Version::V3_0,
        Version::V3_1,
        Version::V4_0,
    ]);
    let vendors = prop::sample::select(vec![
        Vendor::W3C,
        Vendor::Saxon { major: 10, minor: 0 },
        Vendor::BaseX { major: 9, minor: 1 },
    ]);
    (versions, vendors, prop::bool::ANY).prop_map(|(version, vendor, xquery)| {
        let dialect = if xquery && version != Version::V2_0 {
            DialectConfig::xquery(version)
        } else {
            DialectConfig::xpath(version)
        };
        dialect.with_vendor(vendor)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tree_covers_input(input in any_input(), dialect in any_dialect()) {
        let parse = parse(&input, dialect);
        let root = parse.syntax();
        prop_assert_eq!(root.kind(), SyntaxKind::Root);
        prop_assert_eq!(root.text().to_string(), input.clone());
        prop_assert_eq!(usize::from(root.text_range().end()), input.len());
    }

    #[test]
    fn tokens_concatenate_to_input(input in any_input(), dialect in any_dialect()) {
        let parse = parse(&input, dialect);
        let text: String = parse
            .syntax()
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .map(|token| token.text().to_string())
            .collect();
        prop_assert_eq!(text, input);
    }

    #[test]
    fn parsing_is_deterministic(input in any_input(), dialect in any_dialect()) {
        let first = parse(&input, dialect);
        let second = parse(&input, dialect);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn diagnostics_lie_within_input(input in any_input(), dialect in any_dialect()) {
        let parse = parse(&input, dialect);
        for error in parse.errors() {
            prop_assert!(usize::from(error.range.end()) <= input.len());
        }
        let starts: Vec<_> = parse.errors().iter().map(|e| e.range.start()).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn disabled_constructs_never_parse(input in fragment_soup()) {
        let parse = parse(&input, DialectConfig::xpath(Version::V1_0));
        let gated = [
            SyntaxKind::RangeExpr,
            SyntaxKind::IfExpr,
            SyntaxKind::ForExpr,
            SyntaxKind::LetExpr,
            SyntaxKind::QuantifiedExpr,
            SyntaxKind::InstanceofExpr,
            SyntaxKind::CastExpr,
            SyntaxKind::MapConstructor,
            SyntaxKind::SquareArrayConstructor,
            SyntaxKind::InlineFunctionExpr,
            SyntaxKind::NamedFunctionRef,
            SyntaxKind::ArrowExpr,
            SyntaxKind::FlworExpr,
            SyntaxKind::DirElemConstructor,
            SyntaxKind::StringConstructor,
        ];
        for node in parse.syntax().descendants() {
            prop_assert!(!gated.contains(&node.kind()), "{:?} in {:?}", node.kind(), input);
        }
    }
}
