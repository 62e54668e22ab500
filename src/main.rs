use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolshelf::{assemble, config, output};

#[derive(Parser)]
#[command(name = "toolshelf")]
#[command(version)]
#[command(about = "Publish a directory of standalone HTML tool pages")]
#[command(long_about = "\
Publish a directory of standalone HTML tool pages

Each *.html file in the source directory is one tool. toolshelf generates an
index.html linking to every page, injects a uniform footer into each page
(idempotently: re-running never duplicates footers), and writes the result
to the output directory. Inputs are never modified.

Pages may embed a JSON descriptor that drives their index entry:

  TOOL_OVERVIEW_START
  {
    \"name\": \"Widget\",
    \"description\": \"does things\",
    \"functionality\": { \"live_preview\": \"Renders output as you type\" },
    \"dependencies\": [\"marked.js\"],
    \"last_updated\": \"2026-08-01\"
  }
  TOOL_OVERVIEW_END

Pages without a descriptor fall back to a filename-derived title.

Footer links are built from the repository configuration, resolved from
GITHUB_REPOSITORY / GITHUB_REF_NAME (or toolshelf.toml in the source
directory), so CI builds link back to the right repo automatically.")]
struct Cli {
    /// Directory containing the HTML tool pages
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory for the published site
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory containing the three templates
    #[arg(long, default_value = "templates", global = true)]
    templates: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the index and inject footers into every page
    Build,
    /// List pages and descriptor problems without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!(
                "==> Assembling {} -> {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = assemble::assemble(&cli.source, &cli.output, &cli.templates, &config)?;
            output::print_build_report(&report);
            println!("==> Site written to {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = assemble::inventory(&cli.source)?;
            output::print_check_report(&report);
        }
    }

    Ok(())
}
