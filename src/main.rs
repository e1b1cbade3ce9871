use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;

use doctree::cli::Cli;
use doctree::core::walk::print_tree;
use doctree::fs::RealFileSystem;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("doctree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.root.is_dir() {
        bail!("{} is not a directory", cli.root.display());
    }

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            print_tree(&RealFileSystem, &mut out, &cli.root, cli.max_depth())?;
            out.flush()
                .with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!("Written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            print_tree(&RealFileSystem, &mut stdout.lock(), &cli.root, cli.max_depth())?;
        }
    }

    Ok(())
}
