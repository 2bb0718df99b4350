//! ocaform CLI
//!
//! Command-line surface around the overlay pipeline:
//! - `generate`: load a capture-schema document, annotate it with form
//!   overlays, and print (or write) the annotated document
//! - `inspect`: per-bundle summary of the generated overlays
//!
//! All failure modes live here: unreadable/empty/malformed input files and
//! clipboard export. The pipeline itself never fails.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod inspect;
mod load;
mod render;

#[derive(Parser)]
#[command(name = "ocaform")]
#[command(
    author,
    version,
    about = "ocaform: form-overlay generator for capture-schema documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a capture-schema document with form overlays.
    Generate {
        /// Input JSON document
        input: PathBuf,
        /// Write the annotated document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also copy the rendered document to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Summarize the overlays a document gets (read-only report).
    Inspect {
        /// Input JSON document
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { input, out, copy } => cmd_generate(&input, out.as_deref(), copy),
        Commands::Inspect { input } => cmd_inspect(&input),
    }
}

fn cmd_generate(input: &Path, out: Option<&Path>, copy: bool) -> Result<()> {
    println!("{} {}", "Loading".green().bold(), input.display());
    let document = load::load_document(input)?;

    println!("{} form overlays", "Generating".green().bold());
    let annotated = ocaform_overlay::apply(document);
    let rendered = render::render(&annotated)?;

    match out {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("  {} {}", "→".cyan(), path.display());
        }
        None => println!("{rendered}"),
    }

    if copy {
        // Reported, never fatal: the rendered output above is already
        // complete and the document is unaffected.
        match render::copy_to_clipboard(&rendered) {
            Ok(()) => println!("  {} copied to clipboard", "→".cyan()),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard export failed");
                eprintln!("  {} clipboard export failed: {err:#}", "!".red());
            }
        }
    }

    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<()> {
    println!("{} {}", "Inspecting".green().bold(), input.display());
    let document = load::load_document(input)?;
    let annotated = ocaform_overlay::apply(document);
    inspect::print_summary(&annotated);
    Ok(())
}
