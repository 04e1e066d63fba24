mod grammar;
mod properties;
mod recovery;
mod scenarios;

use crate::dialect::{DialectConfig, Version};
use crate::parser::{Parse, TreePrinter, parse};

pub(super) fn xpath() -> DialectConfig {
    DialectConfig::xpath(Version::V3_1)
}

pub(super) fn xquery() -> DialectConfig {
    DialectConfig::xquery(Version::V3_1)
}

/// Tree dump of input that must parse cleanly and round-trip.
pub(super) fn dump_valid(input: &str, dialect: DialectConfig) -> String {
    let parse = parse(input, dialect);
    assert!(
        parse.is_valid(),
        "unexpected errors:\n{}",
        parse.diagnostics().printer().render()
    );
    assert_eq!(parse.syntax().text().to_string(), input);
    parse.debug_tree()
}

/// Tree dump followed by the rendered diagnostics.
pub(super) fn dump_invalid(input: &str, dialect: DialectConfig) -> String {
    let parse = parse(input, dialect);
    assert!(!parse.is_valid(), "expected errors for {input:?}");
    assert_eq!(parse.syntax().text().to_string(), input);
    format!(
        "{}---\n{}",
        parse.debug_tree(),
        parse.diagnostics().printer().render()
    )
}

pub(super) fn errors(input: &str, dialect: DialectConfig) -> String {
    parse(input, dialect).diagnostics().printer().render()
}

pub(super) fn dump_with_trivia(parse: &Parse) -> String {
    TreePrinter::new(&parse.syntax()).with_trivia(true).dump()
}
