//! unxopp CLI - Xournal++ to TikZ conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unxopp::{parse_file, render, JsonFormat};

#[derive(Parser)]
#[command(name = "unxopp")]
#[command(version)]
#[command(about = "Convert Xournal++ notes to standalone TikZ documents", long_about = None)]
struct Cli {
    /// Input .xopp file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a note to a standalone TikZ document
    Tikz {
        /// Input .xopp file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed document model as JSON
    Json {
        /// Input .xopp file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input .xopp file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Tikz { input, output }) => cmd_tikz(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert to TikZ on stdout if input is provided
            if let Some(input) = cli.input {
                cmd_tikz(&input, None)
            } else {
                println!("{}", "Usage: unxopp <FILE>".yellow());
                println!("       unxopp --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_tikz(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    log::debug!("parsed {} page(s), {} item(s)", doc.page_count(), doc.item_count());
    let tikz = render::to_tikz(&doc)?;

    if let Some(path) = output {
        fs::write(path, &tikz)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", tikz);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let doc = parse_file(input)?;
    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    println!("{}", "Document".green().bold());
    println!("  Pages: {}", doc.page_count());
    for (index, page) in doc.pages.iter().enumerate() {
        println!(
            "  Page {}: {} layer(s), {} item(s)",
            index + 1,
            page.layers.len(),
            page.item_count()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("unxopp {}", env!("CARGO_PKG_VERSION"));
}
