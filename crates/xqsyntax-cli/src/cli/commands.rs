//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("xqsyntax")
        .about("Inspect XPath and XQuery syntax trees and diagnostics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(delimit_command())
        .subcommand(template_command())
}

/// Input selection shared by the commands that parse source text.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(file_arg()).arg(expr_arg()).arg(dialect_arg())
}

pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the concrete syntax tree")
        .override_usage(
            "\
  xqsyntax ast <FILE>
  xqsyntax ast -e <TEXT> [-d <DIALECT>]",
        )
        .after_help(
            r#"EXAMPLES:
  xqsyntax ast query.xq                      # XQuery 3.1 tree
  xqsyntax ast -e '1 + 2' -d xpath-3.1       # inline XPath
  xqsyntax ast -e '//a' --trivia --spans     # every token with byte ranges
  xqsyntax ast query.xq --json               # tree and diagnostics as JSON"#,
        )
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(json_arg());
    with_input_args(cmd)
}

pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors")
        .override_usage(
            "\
  xqsyntax check <FILE>
  xqsyntax check -e <TEXT> [-d <DIALECT>]",
        )
        .after_help(
            r#"EXAMPLES:
  xqsyntax check query.xq                    # silent when valid
  xqsyntax check -e 'map { 1: 2 }' -d xpath-3.0"#,
        )
        .arg(color_arg());
    with_input_args(cmd)
}

pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens").about("Show the token stream");
    with_input_args(cmd)
}

pub fn delimit_command() -> Command {
    Command::new("delimit")
        .about("Show whether whitespace is needed between two tokens")
        .after_help(
            r#"EXAMPLES:
  xqsyntax delimit IntegerLiteral NCName     # required
  xqsyntax delimit IntegerLiteral Dollar     # optional"#,
        )
        .arg(kind_arg("left", "LEFT"))
        .arg(kind_arg("right", "RIGHT"))
}

pub fn template_command() -> Command {
    Command::new("template")
        .about("Show the embedded expressions of a value template")
        .arg(template_text_arg())
        .arg(dialect_arg())
}
