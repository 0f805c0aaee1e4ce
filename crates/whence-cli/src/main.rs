//! `whence` — resolve a relative time phrase against a reference instant.

use std::fmt;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "whence",
    about = "Resolve relative time phrases (\"10 hours ago\") to absolute timestamps",
    version,
    after_help = "Run 'whence' with no phrase to see example invocations."
)]
struct Cli {
    /// Phrase to resolve, e.g. "10 hours ago" or "2 days in the future"
    phrase: Option<String>,

    /// Reference instant as RFC 3339 (defaults to the current local time)
    #[arg(long, value_name = "RFC3339")]
    at: Option<String>,

    /// Output the parsed offset and resolved instant as JSON (machine-readable)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Diagnostics (e.g. parse-failure warnings from the library) go to
    // stderr; stdout carries only the sentence.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(phrase) = cli.phrase else {
        // Example invocations, shown when no phrase is given.
        println!("{}", whence::describe_now("10 hours ago")?);
        println!("{}", whence::describe_now("2 days in the future")?);
        return Ok(());
    };

    match cli.at {
        Some(at) => {
            let reference = DateTime::parse_from_rfc3339(&at)
                .with_context(|| format!("invalid --at instant '{at}'"))?;
            run(&phrase, reference, cli.json)
        }
        None => run(&phrase, Local::now(), cli.json),
    }
}

fn run<Tz: TimeZone>(phrase: &str, reference: DateTime<Tz>, json: bool) -> Result<()>
where
    Tz::Offset: fmt::Display,
{
    if json {
        println!("{}", render_json(phrase, reference)?);
    } else {
        println!("{}", whence::describe(phrase, reference)?);
    }
    Ok(())
}

/// Machine-readable variant: the parsed phrase, the resolved instant as
/// RFC 3339, and the composed sentence.
fn render_json<Tz: TimeZone>(input: &str, reference: DateTime<Tz>) -> Result<String>
where
    Tz::Offset: fmt::Display,
{
    let value = match whence::parse_phrase(input) {
        Ok(phrase) => {
            let resolved = whence::apply_offset(&phrase, reference.clone())?;
            let sentence = whence::describe(input, reference)?;
            serde_json::json!({
                "phrase": phrase,
                "resolved": resolved.to_rfc3339(),
                "sentence": sentence,
            })
        }
        Err(_) => serde_json::json!({ "error": whence::INVALID_INPUT }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
