mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use romdoc_decoder::{generate_tables, render_documents, GeneratorConfig};
use romdoc_spec::{Rom, RomKind};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const MICROCODE_TABLE: &str = "microcode_table.md";
const NANOCODE_TABLE: &str = "nanocode_table.md";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load both dumps, then write every output. Nothing is written unless both
/// dumps decode cleanly.
fn run(cli: &Cli) -> Result<()> {
    let microcode = load(RomKind::Microcode, &cli.microrom)?;
    let nanocode = load(RomKind::Nanocode, &cli.nanorom)?;

    let config = GeneratorConfig {
        expand_subfields: cli.expand_subfields,
    };
    let tables = generate_tables(&microcode, &nanocode, &config)?;
    let documents = render_documents(&tables);

    let json = match &cli.json {
        Some(_) => Some(serde_json::to_string_pretty(&tables)?),
        None => None,
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;
    write(&cli.out_dir.join(MICROCODE_TABLE), &documents.microcode)?;
    write(&cli.out_dir.join(NANOCODE_TABLE), &documents.nanocode)?;
    if let (Some(path), Some(json)) = (&cli.json, json) {
        write(path, &json)?;
    }

    tracing::info!(
        "generated {} microcode and {} nanocode entries",
        tables.microcode.len(),
        tables.nanocode.len()
    );
    Ok(())
}

fn load(kind: RomKind, path: &Path) -> Result<Rom> {
    Rom::load(kind, path)
        .with_context(|| format!("failed to load {} ROM from {}", kind, path.display()))
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
