use xqsyntax_lib::space_requirement_by_name;

pub struct DelimitArgs {
    pub left: String,
    pub right: String,
}

pub fn run(args: DelimitArgs) {
    match space_requirement_by_name(&args.left, &args.right) {
        Ok(requirement) => println!("{}", requirement),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
