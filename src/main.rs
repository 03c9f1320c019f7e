//! unleech - pseudo-Darkleech payload recovery CLI
//!
//! Decode and print obfuscated redirection payloads from injected webpages.

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use unleech::{RecoverOptions, RecoveredPayload, Severity};

#[derive(Parser, Debug)]
#[command(name = "unleech")]
#[command(
    author,
    version,
    about = "Recover obfuscated redirection payloads from pseudo-Darkleech injected webpages"
)]
#[command(long_about = "
unleech decodes the keyed character-pair substitution used by pseudo-
Darkleech injections (early 2016). It finds the decode key hidden in the
page itself, runs the reverse transform over every candidate element, and
prints the decodes that look like genuine recovered script.

EXAMPLES:
    unleech injected.html             # recover and print payloads
    unleech --json injected.html      # JSON output for tooling
    unleech --show-key injected.html  # print the decode key and exit
    unleech -k Moz13 injected.html    # decode with a known key
")]
struct Cli {
    /// Injected page to analyze (HTML file)
    #[arg(required = true)]
    target: String,

    /// CSS selector for candidate elements
    #[arg(long, default_value = unleech::DEFAULT_SELECTOR)]
    selector: String,

    /// Decode with KEY instead of searching the page for one
    #[arg(short, long)]
    key: Option<String>,

    /// Print the recovered decode key and exit
    #[arg(long)]
    show_key: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Simple output (one payload per line, no columns)
    #[arg(long)]
    simple: bool,

    /// Show all decoded candidates, including implausible ones
    #[arg(long)]
    unfiltered: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let path = Path::new(&cli.target);
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", cli.target);
    }

    let html = String::from_utf8_lossy(&fs::read(path)?).into_owned();

    let fragments = unleech::extract_fragments_with_selector(&html, &cli.selector)?;

    // Handle --show-key flag
    if cli.show_key {
        let found = unleech::find_key(&fragments)?;
        println!("{}", found);
        return Ok(());
    }

    let mut opts = RecoverOptions::new().with_rejected(cli.unfiltered);
    if let Some(ref key) = cli.key {
        opts = opts.with_key(key);
    }

    let recovery = unleech::recover_fragments(&fragments, &opts)?;

    // Determine if we should use colors
    let use_color = !cli.no_color && !cli.json && io::stdout().is_terminal();

    // Output results
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recovery)?);
    } else if cli.simple {
        for payload in &recovery.payloads {
            println!("{}", payload.value);
        }
        eprintln!("\n{} payloads recovered", recovery.payloads.len());
    } else {
        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        if recovery.payloads.is_empty() {
            println!("No payloads recovered from {}", filename);
            return Ok(());
        }

        if use_color {
            println!(
                "{}{}  {} payloads from {} (key: {}){}",
                BOLD,
                DIM,
                recovery.payloads.len(),
                filename,
                recovery.key,
                RESET
            );
        } else {
            println!(
                "  {} payloads from {} (key: {})",
                recovery.payloads.len(),
                filename,
                recovery.key
            );
        }
        println!();

        for payload in &recovery.payloads {
            print_payload_line(payload, use_color);
        }

        println!();
    }

    Ok(())
}

fn print_payload_line(payload: &RecoveredPayload, use_color: bool) {
    let index = format!("{:>4}", payload.fragment_index);
    let kind = payload.kind.short_name();

    // Get color based on severity
    let (color, kind_color) = if use_color {
        match payload.kind.severity() {
            Severity::High => (RED, RED),
            Severity::Medium => (YELLOW, YELLOW),
            Severity::Info => ("", DIM),
        }
    } else {
        ("", "")
    };

    // Format the value, truncating if very long
    let value = if payload.value.chars().count() > 120 {
        let head: String = payload.value.chars().take(117).collect();
        format!("{}...", head)
    } else {
        payload.value.clone()
    };

    if use_color {
        println!(
            "  {}{}{} {}{:<8}{} {}{}{}",
            DIM, index, RESET, kind_color, kind, RESET, color, value, RESET
        );
    } else {
        println!("  {} {:<8} {}", index, kind, value);
    }
}
