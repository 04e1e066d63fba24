//! Show the concrete syntax tree of an expression or module.

use xqsyntax_lib::{TreePrinter, parse};

use super::input::InputArgs;
use super::json;

pub struct AstArgs {
    pub input: InputArgs,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
}

pub fn run(args: AstArgs) {
    let input = args.input.load_or_exit();
    let parse = parse(&input.source, input.dialect);

    if args.json {
        match json::render(&parse, args.trivia) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let tree = TreePrinter::new(&parse.syntax())
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", tree);

    // The tree is printed even when invalid; diagnostics follow on stderr.
    if !parse.is_valid() {
        eprintln!("{}", parse.diagnostics().render(&input.source));
    }
}
