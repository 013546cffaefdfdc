use std::io::{self, Write};
use std::process::ExitCode;

use markup::{ClosePolicy, ParseOptions, UnclosedPolicy};
use tracing::{error, info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::Error;
use crate::outline::write_outline;

mod error;
/// Printing of node trees
mod outline;
/// Fetching of documents from files, stdin and the web
mod source;

const USAGE: &str =
    "usage: tagtree <INPUT> [--tokens] [--strict-close] [--reject-unclosed] [--trace]";

struct Args {
    pub input: String,
    pub tokens: bool,
    pub options: ParseOptions,
    pub trace: bool,
}

fn main() -> ExitCode {
    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("tagtree: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::DEBUG)
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .finish()
            .init();
        info!("Logger initialized");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Failed");
            eprintln!("tagtree: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut pargs: pico_args::Arguments) -> Result<Args, Error> {
    let mut options = ParseOptions::default();
    if pargs.contains("--strict-close") {
        options = options.with_close_policy(ClosePolicy::Strict);
    }
    if pargs.contains("--reject-unclosed") {
        options = options.with_unclosed_policy(UnclosedPolicy::Reject);
    }
    let args = Args {
        tokens: pargs.contains("--tokens"),
        trace: pargs.contains(["-t", "--trace"]),
        options,
        input: pargs.free_from_str()?,
    };
    let rest = pargs.finish();
    if !rest.is_empty() {
        return Err(Error::UnknownArgs(
            rest.iter().map(|arg| arg.to_string_lossy().into_owned()).collect(),
        ));
    }
    Ok(args)
}

#[cfg(test)]
fn arguments(args: &[&str]) -> pico_args::Arguments {
    let args = args.iter().map(|arg| std::ffi::OsString::from(*arg)).collect();
    pico_args::Arguments::from_vec(args)
}

#[cfg(test)]
#[test]
fn test_parse_args() {
    let args = parse_args(arguments(&["--tokens", "page.html", "--strict-close"])).unwrap();
    assert_eq!(args.input, "page.html");
    assert!(args.tokens);
    assert!(!args.trace);
    assert_eq!(args.options.close_policy, ClosePolicy::Strict);
    assert_eq!(args.options.unclosed_policy, UnclosedPolicy::Accept);
}

#[cfg(test)]
#[test]
fn test_parse_args_rejects_unknown() {
    match parse_args(arguments(&["page.html", "--strict", "extra"])) {
        Err(Error::UnknownArgs(rest)) => assert_eq!(rest, vec!["--strict", "extra"]),
        _ => panic!("leftover arguments were accepted"),
    }
    assert!(matches!(parse_args(arguments(&[])), Err(Error::Args(_))));
}

fn run(args: &Args) -> Result<(), Error> {
    let text = source::load(&args.input)?;
    let tokens = lexer::tokenize(&text);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.tokens {
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
        writeln!(out)?;
    }

    let roots = markup::parse_with(&tokens, args.options)?;
    let span = span!(Level::DEBUG, "Writing outline", roots = roots.len());
    let _enter = span.enter();
    write_outline(&mut out, &roots)?;
    Ok(())
}
