// ABOUTME: CLI for running #id / .class / tag queries against an HTML file or stdin.
// ABOUTME: Prints matched nodes as JSON, their attribute values, or their inner text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use htmlelements::{
    get_attribute, inner_text, Document, NodeRef, NodeSummary, ParseMode, ParseOptions, Query,
};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Query a parsed HTML document the way browser scripts do.
#[derive(Parser, Debug)]
#[command(name = "htmlelements")]
#[command(about = "Run getElementById / getElementsByClassName / getElementsByTagName over HTML", long_about = None)]
struct Args {
    /// Query: `#id`, `.class` or a tag name.
    query: String,

    /// HTML file to read. Use "-" or omit to read stdin.
    #[arg(long = "html")]
    html: Option<String>,

    /// Print the value of this attribute for every match instead of a summary.
    #[arg(long, conflicts_with = "text")]
    attr: Option<String>,

    /// Print the inner text of every match, one per line.
    #[arg(long, default_value_t = false)]
    text: bool,

    /// Treat the input as a body fragment rather than a full document.
    #[arg(long, default_value_t = false)]
    fragment: bool,

    /// Charset label or Content-Type value used to decode the input.
    #[arg(long)]
    charset: Option<String>,

    /// Drop whitespace-only text nodes while parsing.
    #[arg(long, default_value_t = false)]
    drop_whitespace: bool,

    /// Drop comment nodes while parsing.
    #[arg(long, default_value_t = false)]
    drop_comments: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let query: Query = args.query.parse()?;

    let opts = ParseOptions::builder()
        .mode(if args.fragment {
            ParseMode::Fragment
        } else {
            ParseMode::Document
        })
        .keep_comments(!args.drop_comments)
        .drop_whitespace_text(args.drop_whitespace)
        .build();

    let source = args.html.as_deref().unwrap_or("-");
    let bytes = load_bytes(source)?;
    let doc = Document::from_bytes(&bytes, args.charset.as_deref(), &opts);

    let matches = doc.select(&query);
    debug!(query = %query, matches = matches.len(), "query complete");

    if args.text {
        for node in &matches {
            println!("{}", inner_text(*node));
        }
        return Ok(());
    }

    let output = match &args.attr {
        Some(name) => json!(attribute_values(&matches, name)),
        None => Value::Array(
            matches
                .iter()
                .map(|n| NodeSummary::from_node(*n).to_json())
                .collect::<serde_json::Result<Vec<_>>>()?,
        ),
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn attribute_values<'a>(matches: &[NodeRef<'a>], name: &str) -> Vec<&'a str> {
    matches
        .iter()
        .map(|n| get_attribute(n.value(), name))
        .collect()
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
    {
        eprintln!("error: failed to set up logging: {}", e);
    }
}
