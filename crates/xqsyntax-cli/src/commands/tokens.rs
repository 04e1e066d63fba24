//! Print the token stream, one token per line.

use xqsyntax_lib::parser::lexer::{lex, token_text};

use super::input::InputArgs;

pub struct TokensArgs {
    pub input: InputArgs,
}

pub fn run(args: TokensArgs) {
    let input = args.input.load_or_exit();
    let (tokens, diagnostics) = lex(&input.source, input.dialect);

    for token in &tokens {
        println!(
            "{:?} {}..{} {:?}",
            token.kind,
            u32::from(token.span.start()),
            u32::from(token.span.end()),
            token_text(&input.source, token)
        );
    }

    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.render(&input.source));
    }
}
