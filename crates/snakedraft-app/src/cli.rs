// Command-line argument checking.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: snakedraft <rankings-file>  \
(an ordered, tab-delimited file with one captain/contestant pair per line)";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected exactly 1 argument, got {got}")]
pub struct UsageError {
    pub got: usize,
}

/// Extract the rankings path from the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<PathBuf, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [path] => Ok(PathBuf::from(path)),
        _ => Err(UsageError { got: args.len() }),
    }
}
