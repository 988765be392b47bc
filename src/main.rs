//! biz-scraper main entry point
//!
//! This is the command-line interface: the web UI, batch scraping, and the
//! demo run.

use biz_scraper::config::{apply_env_overrides, load_config_with_hash, Config};
use biz_scraper::crawler::crawl;
use biz_scraper::output::{print_summary, summarize};
use biz_scraper::url::split_url_list;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sites scraped by the `demo` subcommand
const DEMO_SITES: [&str; 3] = ["httpbin.org", "example.com", "httpstat.us/200"];

/// biz-scraper: business contact details from a list of websites
///
/// Fetches each website in turn and pulls out the business name, email
/// address, Instagram profile and phone number, then exports everything
/// as CSV.
#[derive(Parser, Debug)]
#[command(name = "biz-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrape business contact details from websites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web UI
    Serve,

    /// Scrape websites and export the results as CSV
    Scrape {
        /// Websites to scrape; a missing scheme means https
        #[arg(value_name = "URL")]
        urls: Vec<String>,

        /// Text file with one website per line
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// CSV output path, overriding the configured one
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Scrape a few public test sites to show what gets extracted
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    match cli.command {
        Command::Serve => handle_serve(config).await,
        Command::Scrape { urls, file, output } => {
            if let Some(output) = output {
                config.output.csv_path = output.display().to_string();
            }
            handle_scrape(&config, urls, file).await
        }
        Command::Demo => handle_demo(&config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("biz_scraper=info,warn"),
            1 => EnvFilter::new("biz_scraper=debug,tower_http=debug,info"),
            2 => EnvFilter::new("biz_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, then applies env overrides
fn load(path: Option<&std::path::Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Handles `serve`: runs the web UI until interrupted
async fn handle_serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting web server on {}", config.server.bind_address());

    if let Err(e) = biz_scraper::server::serve(&config).await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Handles `scrape`: batch mode over URLs from arguments and/or a file
async fn handle_scrape(
    config: &Config,
    mut urls: Vec<String>,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(file) = file {
        let content = std::fs::read_to_string(&file)?;
        let from_file = split_url_list(&content);
        tracing::info!("Read {} URLs from {}", from_file.len(), file.display());
        urls.extend(from_file);
    }

    if urls.is_empty() {
        return Err("No URLs provided".into());
    }

    let state = match crawl(config, urls).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let summary = summarize(&state.results);
    print_summary(&state.results, &summary);

    if !state.results.is_empty() {
        println!("Results saved to: {}", config.output.csv_path);
    }
    if !state.errors.is_empty() {
        println!("\n{} websites could not be loaded:", state.errors.len());
        for error in &state.errors {
            println!("  - {}", error);
        }
    }

    Ok(())
}

/// Handles `demo`: scrapes the fixed test sites and prints every record
async fn handle_demo(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== biz-scraper demo ===\n");
    println!("Demo websites: {}\n", DEMO_SITES.join(", "));

    let urls = DEMO_SITES.iter().map(|s| s.to_string()).collect();
    let state = crawl(config, urls).await?;

    for (i, record) in state.results.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, DEMO_SITES.len(), record.website);
        println!("    Business Name: {}", record.business_name);
        println!("    Email: {}", record.email);
        println!("    Instagram: {}", record.instagram);
        println!("    Phone: {}", record.phone);
    }
    println!();

    print_summary(&state.results, &summarize(&state.results));
    println!("For real scraping, run `biz-scraper serve` or `biz-scraper scrape <URL>...`");

    Ok(())
}
