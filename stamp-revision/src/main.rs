//! Reads a source file on stdin and writes `revision.h` to stdout.
//!
//! ```text
//! stamp_revision < main.c > revision.h
//! ```

mod util;

use std::io::{Read, Write};

use clap::Parser;
use revision_common::{marker, Header, Revision};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

/// Scans all of `input` and writes the header to `output` in one piece.
/// Nothing is written when scanning fails.
fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<Revision, util::Error> {
    let mut source = Vec::new();
    input.read_to_end(&mut source)?;

    let lines = || source.split(|b| *b == b'\n');
    log::debug!("scanning {} lines", lines().count());
    let revision = marker::scan(lines())?;
    if revision.is_found() {
        log::debug!("revision {} ({})", revision, revision.idloc());
    } else {
        log::warn!("no revision marker found, using {}", revision);
    }

    let header = Header::new(revision).to_string();
    output.write_all(header.as_bytes())?;
    output.flush()?;

    Ok(revision)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _args = Args::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = run(stdin.lock(), stdout.lock()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
