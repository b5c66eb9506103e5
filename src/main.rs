use clap::{Parser, Subcommand};
use knight_gal::catalog::Catalog;
use knight_gal::config::{self, SiteConfig};
use knight_gal::events::group_by_event;
use knight_gal::filter::{CategoryFilter, FilterState, filter_photos};
use knight_gal::gallery::{Gallery, Intent};
use knight_gal::{generate, output};
use std::io::BufRead;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "knight-gal")]
#[command(about = "Photo gallery for the Cyber Knight club")]
#[command(long_about = "\
Photo gallery for the Cyber Knight club

Search, filter and browse the club's photos from the terminal, or build them
into a static gallery site.

Content structure:

  content/
  ├── config.toml      # Site config (optional, see gen-config)
  ├── photos.toml      # Photo catalog (optional, built-in photos if missing)
  └── assets/          # Static assets (favicon, fonts) → copied to output root

Photos are grouped into events by the part of their title before \" - \":
\"Hack Night - Finals\" belongs to the event \"Hack Night\".

Intents accepted by 'browse', one per line:
  search <text>      category <all|events|workshops|competitions|team>
  event <name>       clear-event
  open <id>          next | prev | close

Run 'knight-gal gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the photos matching the given filters
    List {
        /// Case-insensitive text matched against title, description and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Category key, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Event name (title prefix or tag)
        #[arg(long)]
        event: Option<String>,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print event groups with their photos
    Events,
    /// Read intents from stdin and print the gallery state after each
    Browse,
    /// Validate config and catalog without building
    Check,
    /// Generate the static gallery site
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List {
            search,
            category,
            event,
            json,
        } => {
            let (_, catalog) = load_content(&cli.source)?;
            let state = FilterState {
                search,
                category,
                event,
            };
            let results = filter_photos(&catalog.photos, &state);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_list_output(&results, &state);
            }
        }
        Command::Events => {
            let (_, catalog) = load_content(&cli.source)?;
            output::print_events_output(&group_by_event(&catalog.photos));
        }
        Command::Browse => {
            let (_, catalog) = load_content(&cli.source)?;
            let mut gallery = Gallery::new(&catalog.photos);
            gallery.apply();
            output::print_browse_state(&gallery);
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                println!("> {}", line.trim());
                let result = line
                    .parse::<Intent>()
                    .and_then(|intent| gallery.dispatch(intent));
                if let Err(e) = result {
                    eprintln!("error: {e}");
                }
                output::print_browse_state(&gallery);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (config, catalog) = load_content(&cli.source)?;
            let events = group_by_event(&catalog.photos).len();
            output::print_check_output(&catalog, events, &catalog_source(&config, &cli.source));
            println!("==> Content is valid");
        }
        Command::Build => {
            let (config, catalog) = load_content(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&catalog, &config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` and the catalog it points to.
fn load_content(source: &Path) -> Result<(SiteConfig, Catalog), Box<dyn std::error::Error>> {
    let config = config::load_config(source)?;
    let catalog = Catalog::load_or_builtin(&config.catalog_path(source))?;
    Ok((config, catalog))
}

fn catalog_source(config: &SiteConfig, source: &Path) -> String {
    let path = config.catalog_path(source);
    if path.exists() {
        path.display().to_string()
    } else {
        format!("built-in ({} not found)", path.display())
    }
}
