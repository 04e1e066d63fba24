use xqsyntax_lib::parse;

use super::input::InputArgs;

pub struct CheckArgs {
    pub input: InputArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = args.input.load_or_exit();
    let parse = parse(&input.source, input.dialect);

    if !parse.is_valid() {
        let mut printer = parse
            .diagnostics()
            .printer()
            .source(&input.source)
            .colored(args.color);
        if let Some(path) = &input.path {
            printer = printer.path(path);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
