use std::{
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bbenc_document::StyledDocument;
use bbenc_encoder::{Encoder, EncoderOptions};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Convert a styled-text document (JSON) to BBCode markup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document as JSON; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the markup here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the entire output in [code]...[/code]
    #[arg(long)]
    code: bool,

    /// Replace each tab in the text with four spaces
    #[arg(long)]
    tabs_to_spaces: bool,

    /// Extend strikethrough spans to whole words
    #[arg(long)]
    strike_full_word: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    let document = read_document(args.input.as_deref())?;
    let options = EncoderOptions::builder()
        .enclose_in_code_tags(args.code)
        .replace_tabs_with_spaces(args.tabs_to_spaces)
        .strike_full_word(args.strike_full_word)
        .build();
    let bbcode = Encoder::new(options).encode(&document);
    write_output(args.output.as_deref(), &bbcode)?;

    Ok(())
}

#[tracing::instrument]
fn read_document(path: Option<&Path>) -> Result<StyledDocument> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let stdin = io::stdin();
            let mut reader = BufReader::new(stdin.lock());
            let mut input = String::new();
            reader.read_to_string(&mut input)?;
            input
        }
    };
    serde_json::from_str(&raw).context("parsing styled document JSON")
}

#[tracing::instrument(skip(bbcode))]
fn write_output(path: Option<&Path>, bbcode: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bbcode)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{bbcode}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
