//! Command-line front end: extract article text from one HTML file.
//!
//! Prints the extracted text to stdout, or the full extraction result as
//! JSON with `--json`.

use std::path::PathBuf;

use anyhow::Context;
use article_extract::{extract_file, Options, DEFAULT_MAX_LENGTH, DEFAULT_MIN_BLOCK_LEN};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "extract-article", about = "Extract the main article text from an HTML file")]
struct Cli {
    /// HTML file to read (UTF-8)
    html_file: PathBuf,

    /// Maximum number of characters to print
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, value_parser = parse_max_length)]
    max_length: usize,

    /// Keep blocks strictly longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MIN_BLOCK_LEN)]
    min_block_len: usize,

    /// End class/id-matched boilerplate regions at their own closing tag
    #[arg(long)]
    scoped_regions: bool,

    /// Print the whole extraction result as JSON
    #[arg(long)]
    json: bool,

    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            max_length: self.max_length,
            min_block_len: self.min_block_len,
            scoped_regions: self.scoped_regions,
            ..Options::default()
        }
    }
}

fn parse_max_length(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let result = extract_file(&cli.html_file, &cli.options())
        .with_context(|| format!("failed to extract article from {}", cli.html_file.display()))?;

    for warning in &result.warnings {
        tracing::debug!(%warning, "extraction warning");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.text);
    }

    Ok(())
}
