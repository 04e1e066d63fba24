//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Default for `--dialect`.
pub const DEFAULT_DIALECT: &str = "xquery-3.1";

/// Input file (positional). `-` reads stdin.
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file (use \"-\" for stdin)")
}

/// Inline expression text (-e/--expr).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .short('e')
        .long("expr")
        .value_name("TEXT")
        .conflicts_with("file")
        .help("Inline expression or query text")
}

/// Dialect selection (-d/--dialect).
pub fn dialect_arg() -> Arg {
    Arg::new("dialect")
        .short('d')
        .long("dialect")
        .value_name("DIALECT")
        .default_value(DEFAULT_DIALECT)
        .help("Language, version and vendor, e.g. xpath-3.1 or xquery-4.0+saxon-10")
}

/// Include trivia tokens (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the tree and diagnostics as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Token kind name (positional).
pub fn kind_arg(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id)
        .value_name(value_name)
        .required(true)
        .help("Token kind name, e.g. IntegerLiteral or KwDiv")
}

/// Value template text (positional).
pub fn template_text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Template text with {expr} segments")
}
