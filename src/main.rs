use clap::{Parser, Subcommand};
use paperpress::{build, config, extract, scan, serve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paperpress")]
#[command(version)]
#[command(about = "Static blog generator for HTML fragments")]
#[command(long_about = "\
Static blog generator for HTML fragments

Every .html file below the content root becomes one entry. Metadata is
embedded in the fragment itself as comment markers:

  <!--title: A Day at the Museum-->
  <!--author: ada-->
  <!--tag: travel-->
  <!--tag: art-->
  <p>Body starts here...</p>

Content structure:

  content/
  ├── config.toml            # Site config (optional)
  ├── style.css              # Copied to the output root (optional)
  ├── logo.png               # Copied to the output root (optional)
  ├── hello.html             # Entry → /blog/hello.html
  └── 2024/
      └── second.html        # Entry → /blog/2024/second.html

The generated site holds a paginated chronological index, one paginated
listing per tag and per author, and one article page per entry. Publish
dates and ordering are pinned by content-addressed snapshot records, so
re-running the generator never reorders unchanged entries.

Run 'paperpress gen-config' to print a documented config.toml.")]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site from the content directory
    Build,
    /// Serve the generated output over HTTP
    Serve,
    /// Parse the content directory without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!(
                "==> Building {} → {}",
                cli.source.display(),
                cli.output.display()
            );
            let summary = build::build(&cli.source, &cli.output, &config)?;
            println!(
                "==> {} entries ({} new, {} unchanged), {} pages written",
                summary.entries, summary.created, summary.reused, summary.pages_written
            );
        }
        Command::Serve => {
            let config = config::load_config(&cli.source)?;
            println!(
                "==> Serving {} on http://localhost:{}",
                cli.output.display(),
                config.serve.port
            );
            serve::serve_site(&cli.output, config.serve.port)?;
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let docs = scan::scan(&cli.source)?;
            for (i, doc) in docs.iter().enumerate() {
                let raw = std::fs::read_to_string(&doc.path)?;
                let entry = extract::parse(&raw, &config.default_author, &config.date_format);
                let title = if entry.title.is_empty() {
                    "(untitled)"
                } else {
                    entry.title.as_str()
                };
                println!("{:0>3} {}", i + 1, title);
                println!("    Source: {}", doc.path.display());
                println!(
                    "    Author: {}, tags: {}, hash: {}",
                    entry.author,
                    entry.tags.len(),
                    entry.content_hash
                );
            }
            println!("==> {} documents parsed", docs.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
