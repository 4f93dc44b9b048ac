use clap::{Parser, Subcommand};
use headless_gallery::layout::GalleryItem;
use headless_gallery::render::TemplateRenderer;
use headless_gallery::render::template::DEFAULT_TEMPLATE;
use headless_gallery::routing::{
    FrontendRouter, LanguageOption, PathUriGenerator, Site, UriGenerator, UriParameters,
};
use headless_gallery::{config, output, process};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "headless-gallery")]
#[command(about = "Gallery layout and frontend link routing for headless sites")]
#[command(long_about = "\
Gallery layout and frontend link routing for headless sites

Items are read from a JSON file:

  [
    { \"id\": \"42\", \"width\": 1600, \"height\": 900 },
    { \"id\": \"43\", \"width\": 900, \"height\": 1200, \"kind\": \"image\" }
  ]

Configuration comes from one or more gallery.toml files (--config, repeatable;
later files override earlier ones). Run 'headless-gallery gen-config' for a
documented template.

Set RUST_LOG=debug to see layout decisions on stderr.")]
#[command(version)]
struct Cli {
    /// Config file (repeatable, later files override earlier ones)
    #[arg(long = "config", global = true)]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute item dimensions and the corrected gallery width
    Layout {
        /// JSON file with the gallery items
        #[arg(long)]
        items: PathBuf,
        /// Print the layout as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Lay out the gallery and print the render tree as JSON
    Render {
        /// JSON file with the gallery items
        #[arg(long)]
        items: PathBuf,
        /// Public URL template ({id}, {width}, {height}, {ext})
        #[arg(long, default_value = DEFAULT_TEMPLATE)]
        url_template: String,
        /// Extension used when no file extension is configured
        #[arg(long, default_value = "jpg")]
        default_extension: String,
        /// Print a text summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// Generate a page link, rewritten to the frontend host
    Uri {
        /// Page slug
        page: String,
        /// Language id (defaults to the first configured language)
        #[arg(long)]
        language: Option<u32>,
        /// URI fragment
        #[arg(long, default_value = "")]
        fragment: String,
        /// Query argument as key=value (repeatable)
        #[arg(long = "query", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },
    /// Validate the configuration
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Layout { items, json } => {
            let site_config = config::load_config(&cli.config)?;
            let items = read_items(&items)?;
            let (gallery, layout) = process::plan_layout(&site_config, &items)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                output::print_layout_output(&gallery, &items, &layout);
            }
        }
        Command::Render {
            items,
            url_template,
            default_extension,
            summary,
        } => {
            let site_config = config::load_config(&cli.config)?;
            init_thread_pool(&site_config.processing);
            let items = read_items(&items)?;
            let renderer = TemplateRenderer::new(url_template, default_extension);
            let data = process::process(&renderer, &site_config, &items)?;
            if summary {
                output::print_render_output(&data);
            } else {
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
        }
        Command::Uri {
            page,
            language,
            fragment,
            query,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let site = Site::new(site_config.routing.languages.clone())?;
            let router = FrontendRouter::new(
                site.clone(),
                site_config.routing.frontend_url()?,
                PathUriGenerator::new(site),
            );
            let params = UriParameters {
                language: language.map(LanguageOption::Id),
                query: query.into_iter().collect(),
                ..UriParameters::default()
            };
            println!("{}", router.generate_uri(&page, &params, &fragment)?);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            let sizing = site_config.layout.gallery_config(1).sizing;
            println!("==> Configuration is valid");
            println!("    Sizing: {}", sizing.name());
            println!("    Extra formats: {}", site_config.render.formats.len());
            println!("    Languages: {}", site_config.routing.languages.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn read_items(path: &Path) -> Result<Vec<GalleryItem>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read items from {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("warn,headless_gallery=info"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
