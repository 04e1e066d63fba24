//! Source and dialect selection shared by the parsing commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use xqsyntax_lib::{DialectConfig, dialect_from_name};

pub struct InputArgs {
    pub file: Option<PathBuf>,
    pub expr: Option<String>,
    pub dialect: String,
}

/// Source text plus the name used when rendering diagnostics.
pub struct Input {
    pub source: String,
    pub path: Option<String>,
    pub dialect: DialectConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use a file argument, `-` for stdin, or -e/--expr")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Dialect(#[from] xqsyntax_lib::Error),
}

impl InputArgs {
    pub fn load(&self) -> Result<Input, InputError> {
        let dialect = dialect_from_name(&self.dialect)?;
        let (source, path) = load_source(self.file.as_deref(), self.expr.as_deref())?;
        tracing::debug!(%dialect, len = source.len(), "input loaded");
        Ok(Input {
            source,
            path,
            dialect,
        })
    }

    /// Loads the input or exits with an error message.
    pub fn load_or_exit(&self) -> Input {
        match self.load() {
            Ok(input) => input,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_source(
    file: Option<&Path>,
    expr: Option<&str>,
) -> Result<(String, Option<String>), InputError> {
    if let Some(text) = expr {
        return Ok((text.to_string(), None));
    }

    let Some(path) = file else {
        return Err(InputError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok((buf, Some("<stdin>".to_string())));
    }

    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| InputError::File {
        path: display.clone(),
        source,
    })?;
    Ok((content, Some(display)))
}
