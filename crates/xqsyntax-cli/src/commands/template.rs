//! Show the embedded expressions of a value template.

use xqsyntax_lib::dialect_from_name;
use xqsyntax_lib::value_template;

pub struct TemplateArgs {
    pub text: String,
    pub dialect: String,
}

pub fn run(args: TemplateArgs) {
    let dialect = match dialect_from_name(&args.dialect) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let exprs = value_template::parse(&args.text, dialect);
    let mut failed = false;
    for expr in &exprs {
        let start = usize::from(expr.expr_range.start());
        let end = usize::from(expr.expr_range.end());
        println!(
            "{}..{} {:?}",
            u32::from(expr.range.start()),
            u32::from(expr.range.end()),
            &args.text[start..end]
        );
        if !expr.is_closed() {
            failed = true;
            eprintln!(
                "error: unterminated expression at {}..{}",
                u32::from(expr.range.start()),
                u32::from(expr.range.end())
            );
        }
        // Offsets in nested diagnostics are relative to the expression text.
        for error in expr.parse.errors() {
            failed = true;
            eprintln!("  {}", error);
        }
    }

    if failed {
        std::process::exit(1);
    }
}
