mod cli;
mod commands;

use cli::{AstParams, CheckParams, DelimitParams, TemplateParams, TokensParams, build_cli};

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("delimit", m)) => {
            let params = DelimitParams::from_matches(m);
            commands::delimit::run(params.into());
        }
        Some(("template", m)) => {
            let params = TemplateParams::from_matches(m);
            commands::template::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs to stderr, filtered by `RUST_LOG`. Nothing is installed when it is unset.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .init();
}
