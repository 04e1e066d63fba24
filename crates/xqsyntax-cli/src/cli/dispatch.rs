//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use super::args::DEFAULT_DIALECT;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::delimit::DelimitArgs;
use crate::commands::input::InputArgs;
use crate::commands::template::TemplateArgs;
use crate::commands::tokens::TokensArgs;

pub struct InputParams {
    pub file: Option<PathBuf>,
    pub expr: Option<String>,
    pub dialect: String,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            expr: m.get_one::<String>("expr").cloned(),
            dialect: parse_dialect(m),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            file: p.file,
            expr: p.expr,
            dialect: p.dialect,
        }
    }
}

pub struct AstParams {
    pub input: InputParams,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input.into(),
            trivia: p.trivia,
            spans: p.spans,
            json: p.json,
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

pub struct DelimitParams {
    pub left: String,
    pub right: String,
}

impl DelimitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: m.get_one::<String>("left").cloned().unwrap_or_default(),
            right: m.get_one::<String>("right").cloned().unwrap_or_default(),
        }
    }
}

impl From<DelimitParams> for DelimitArgs {
    fn from(p: DelimitParams) -> Self {
        Self {
            left: p.left,
            right: p.right,
        }
    }
}

pub struct TemplateParams {
    pub text: String,
    pub dialect: String,
}

impl TemplateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            dialect: parse_dialect(m),
        }
    }
}

impl From<TemplateParams> for TemplateArgs {
    fn from(p: TemplateParams) -> Self {
        Self {
            text: p.text,
            dialect: p.dialect,
        }
    }
}

fn parse_dialect(m: &ArgMatches) -> String {
    m.get_one::<String>("dialect")
        .cloned()
        .unwrap_or_else(|| DEFAULT_DIALECT.to_string())
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
