use clap::{Parser, Subcommand};
use docnav::{catalog, config, nav, output, sidebar};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation, sidebar, and catalog data for markdown documentation sites")]
#[command(long_about = "\
Navigation, sidebar, and catalog data for markdown documentation sites

Your filesystem is the data source. Directories become sections, markdown
files become pages, and a two-digit numeric prefix (01-intro.md) fixes
ordering without showing up in display text.

Content structure:

  docs/
  ├── docnav.toml                  # Tool config (optional)
  ├── articles/                    # Scan directory (sidebar.dir_name)
  │   ├── index.md                 # Ignored by default (ignore_file_names)
  │   ├── 01-guide/                # Section, shown as \"guide\"
  │   │   ├── index.md
  │   │   ├── 01-intro.md          # Page, shown as \"intro\"
  │   │   └── advanced/
  │   │       └── tuning.md
  │   ├── reference.md             # Shadows any sibling reference/ directory
  │   └── demo/                    # Ignored (ignore_dir_names)
  └── public/                      # Never cataloged (catalog.exclude_dirs)

Generated data files (build command):
  sidebar.json   path-keyed sidebar trees
  nav.json       top navigation list
  catalog.json   per-section page listings for index pages

Run 'docnav gen-config' to print a documented docnav.toml.")]
#[command(version)]
struct Cli {
    /// Content root containing the scan directory and optional docnav.toml
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory for generated JSON data files
    #[arg(long, default_value = "generated", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print sidebar data as JSON
    Sidebar,
    /// Print navigation data as JSON
    Nav,
    /// Print catalog data as JSON
    Catalog,
    /// Generate all data files: sidebar.json, nav.json, catalog.json
    Build,
    /// Scan the content tree and print what would be generated
    Check,
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Sidebar => {
            let config = config::load_config(&cli.source)?;
            let sidebar = sidebar::build_sidebar(
                &cli.source.join(&config.sidebar.dir_name),
                &config.sidebar,
            );
            if config.sidebar.debug_print {
                output::print_dump(&output::format_sidebar_dump(&sidebar));
            }
            println!("{}", serde_json::to_string_pretty(&sidebar)?);
        }
        Command::Nav => {
            let config = config::load_config(&cli.source)?;
            let nav = nav::build_nav(&cli.source.join(&config.nav.dir_name), &config.nav);
            if config.nav.debug_print {
                output::print_dump(&output::format_nav_dump(&nav));
            }
            println!("{}", serde_json::to_string_pretty(&nav)?);
        }
        Command::Catalog => {
            let config = config::load_config(&cli.source)?;
            let catalog = catalog::build_catalog(&cli.source, &config.catalog);
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            std::fs::create_dir_all(&cli.output)?;

            println!("==> Scanning {}", cli.source.display());
            let sidebar = sidebar::build_sidebar(
                &cli.source.join(&config.sidebar.dir_name),
                &config.sidebar,
            );
            let nav = nav::build_nav(&cli.source.join(&config.nav.dir_name), &config.nav);
            let catalog = catalog::build_catalog(&cli.source, &config.catalog);

            if config.sidebar.debug_print {
                output::print_dump(&output::format_sidebar_dump(&sidebar));
            }
            if config.nav.debug_print {
                output::print_dump(&output::format_nav_dump(&nav));
            }

            write_json(&cli.output.join("sidebar.json"), &sidebar)?;
            write_json(&cli.output.join("nav.json"), &nav)?;
            write_json(&cli.output.join("catalog.json"), &catalog)?;

            output::print_summary(&output::format_sidebar_output(&sidebar));
            output::print_summary(&output::format_nav_output(&nav));
            output::print_summary(&output::format_catalog_output(&catalog));
            println!("==> Generated data in {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let sidebar = sidebar::build_sidebar(
                &cli.source.join(&config.sidebar.dir_name),
                &config.sidebar,
            );
            let nav = nav::build_nav(&cli.source.join(&config.nav.dir_name), &config.nav);
            let catalog = catalog::build_catalog(&cli.source, &config.catalog);
            output::print_summary(&output::format_sidebar_output(&sidebar));
            output::print_summary(&output::format_nav_output(&nav));
            output::print_summary(&output::format_catalog_output(&catalog));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Diagnostics go to stderr; `DOCNAV_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DOCNAV_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
