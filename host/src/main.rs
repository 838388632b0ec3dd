use std::path::Path;

use anyhow::bail;
use platduel_host::{parse_config, parse_session, read_input, replay};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} replay [session.json]     Replay a recorded session (stdin if omitted)");
    eprintln!("  {program} check-config <config.json> Validate a match config");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=platduel_core=debug) for simulation logs.");
}

fn main() -> anyhow::Result<()> {
    // Logs on stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("platduel", String::as_str);

    match args.get(1).map(String::as_str) {
        Some("replay") => {
            let path = args.get(2).map(Path::new);
            let session = parse_session(&read_input(path)?)?;
            let summary = replay(&session)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Some("check-config") => {
            let Some(path) = args.get(2) else {
                print_usage(program);
                bail!("check-config requires a file argument");
            };
            let config = parse_config(&read_input(Some(Path::new(path)))?)?;
            tracing::info!(
                platforms = config.arena.platforms.len(),
                countdown_secs = config.countdown_secs,
                "config ok"
            );
        }
        Some(other) => {
            print_usage(program);
            bail!("unknown command: {other}");
        }
        None => {
            print_usage(program);
            std::process::exit(1);
        }
    }
    Ok(())
}
