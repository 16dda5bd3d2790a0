mod cli;

use anyhow::Context;
use clap::Parser;
use phylolabel::label::label_tree;
use std::io::Write;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

fn main() {
    let args = cli::Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(filter)
        .init();
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let mut phylogeny = args
        .phylogeny_format
        .read_file(&args.phylogeny_file)
        .with_context(|| format!("failed to read phylogeny {}", args.phylogeny_file.display()))?;
    let mut taxonomy = args
        .taxonomy_format
        .read_file(&args.taxonomy_file)
        .with_context(|| format!("failed to read taxonomy {}", args.taxonomy_file.display()))?;

    label_tree(&mut phylogeny, &mut taxonomy, args.root.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    args.output_format
        .write(&mut out, &phylogeny)
        .context("failed to write labeled phylogeny")?;
    out.flush()?;
    Ok(())
}
