use std::io;

/// Everything that can stop the command line tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    Args(#[from] pico_args::Error),
    #[error("unexpected arguments: {}", .0.join(" "))]
    UnknownArgs(Vec<String>),
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("{0} is not a local file URL")]
    NotAFile(url::Url),
    #[error("could not fetch page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("could not build tree: {0}")]
    Parse(#[from] markup::ParseError),
}
