use clap::{ArgAction, Parser, Subcommand};
use start_ashtanga::geo::{self, LatLng};
use start_ashtanga::routes::{Route, split_language};
use start_ashtanga::scan::Manifest;
use start_ashtanga::types::{GlossaryTerm, ShalaData};
use start_ashtanga::{config, generate, glossary, output, scan};
use std::path::{Path, PathBuf};
use tracing::Level;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "start-ashtanga")]
#[command(about = "Static site generator for the Start Ashtanga beginner's guide")]
#[command(long_about = "\
Static site generator for the Start Ashtanga beginner's guide

Every word on the site lives in per-language translation files. The
generator validates them and renders the fixed set of pages for each
configured language.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Static assets (favicon, images) → copied to output root
  └── locales/
      ├── en/                      # Default language, published at /
      │   ├── common.json          # Footer, 404 page, shared labels
      │   ├── nav.json             # Navigation labels
      │   ├── seo.json             # Page titles and descriptions
      │   ├── glossary.json        # Glossary page and the term list
      │   ├── shalas.json          # Directory page and the shala list
      │   └── ...                  # One file per page
      └── pt-BR/                   # Extra language, published at /pt-BR/
          └── ...                  # Missing keys fall back to the default language

Glossary markers:
  [[Vinyasa]] or [[Vinyasa|vinyasas]] in any text renders a tooltip with
  the glossary definition and a link to the glossary entry.

Run 'start-ashtanga gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".start-ashtanga-temp", global = true)]
    temp_dir: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Search the glossary
    Glossary {
        /// Text matched against term, Sanskrit and definition
        #[arg(default_value = "")]
        query: String,
        /// Language to search (defaults to the site default)
        #[arg(long)]
        lang: Option<String>,
    },
    /// List the shala directory
    Shalas {
        /// Filter by name, city, country or teacher
        #[arg(long, default_value = "")]
        query: String,
        /// Sort by distance from a point, e.g. --near 12.31,76.64
        #[arg(long, allow_hyphen_values = true)]
        near: Option<LatLng>,
        /// Language of the listing (defaults to the site default)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Show which page a request path resolves to
    Route {
        /// Request path, e.g. /glossary/ or /pt-BR/glossary/
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Glossary { query, lang } => {
            let manifest = scan::scan(&cli.source)?;
            let t = translator(&manifest, lang.as_deref())?;
            let terms: Vec<GlossaryTerm> = t.objects_or_default("glossary", "terms")?;
            let hits = glossary::search(&terms, &query);
            output::print_glossary_search(&hits, &query, manifest.config.tooltip.preview_chars);
        }
        Command::Shalas { query, near, lang } => {
            let manifest = scan::scan(&cli.source)?;
            let t = translator(&manifest, lang.as_deref())?;
            let shalas: Vec<ShalaData> = t.objects_or_default("shalas", "shalas")?;
            let matches = geo::filter_shalas(&shalas, &query);
            let entries: Vec<(&ShalaData, Option<f64>)> = match near {
                Some(origin) => geo::sort_by_distance(&matches, origin)
                    .into_iter()
                    .map(|(s, km)| (s, Some(km)))
                    .collect(),
                None => matches.into_iter().map(|s| (s, None)).collect(),
            };
            output::print_directory(&entries, &query, &t);
        }
        Command::Route { path } => {
            let config = config::load_config(&cli.source)?;
            let prefixed: Vec<&str> = config
                .i18n
                .languages
                .iter()
                .map(|l| l.code.as_str())
                .filter(|code| *code != config.i18n.default_language)
                .collect();
            let (language, rest) = split_language(&path, &prefixed);
            println!("{}", output::format_route(&path, language, Route::resolve(rest)));
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays the command's output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn write_manifest(manifest: &Manifest, temp_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

fn translator<'a>(
    manifest: &'a Manifest,
    lang: Option<&str>,
) -> Result<start_ashtanga::i18n::Translator<'a>, Box<dyn std::error::Error>> {
    let code = lang.unwrap_or(&manifest.config.i18n.default_language);
    manifest
        .translator(code)
        .ok_or_else(|| format!("language '{code}' is not configured").into())
}
