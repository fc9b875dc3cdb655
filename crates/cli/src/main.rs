//! Typeahead CLI — drive the search widget from the terminal.
//!
//! `lookup` hits the search endpoint once; `type` replays keystrokes through the
//! real debounced widget so its behavior can be watched without a browser.

mod page;
mod session;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;

use typeahead_core::{
    load_typeahead_config, load_typeahead_config_file, HttpSearchClient, Query, SearchClient,
    WidgetConfig,
};

use page::TerminalPage;
use session::{type_into_widget, Keystrokes};

/// Typeahead CLI — debounced search-as-you-type from the terminal.
#[derive(Parser)]
#[command(name = "ta", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Search server base URL (overrides config)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Config file (default: .typeahead.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debounce delay in milliseconds (overrides config)
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a query once and print the matches
    Lookup {
        /// Search query
        query: String,
    },
    /// Type text one character at a time into the widget
    Type {
        /// Text to type
        text: String,

        /// Delay between keystrokes
        #[arg(long, default_value = "100")]
        interval_ms: u64,

        /// Click the result at this position once the session settles
        #[arg(long)]
        select: Option<usize>,

        /// How long to wait for lookups after the last keystroke before selecting
        #[arg(long, default_value = "1000")]
        settle_ms: u64,
    },
}

fn resolve_config(cli: &Cli) -> WidgetConfig {
    let mut config = match &cli.config {
        Some(path) => load_typeahead_config_file(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            load_typeahead_config(&cwd)
        }
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(ms) = cli.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }
    debug!(?config, "Resolved config");
    config
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn build_client(config: &WidgetConfig) -> HttpSearchClient {
    HttpSearchClient::new(config).unwrap_or_else(|e| {
        eprintln!("Could not create HTTP client: {e}");
        std::process::exit(1);
    })
}

async fn cmd_lookup(cli: &Cli, config: &WidgetConfig, query: &str) {
    let query = Query::from_input(query);
    if !query.meets_minimum(config.min_query_len) {
        eprintln!("Query must be at least {} characters", config.min_query_len);
        std::process::exit(1);
    }

    let client = build_client(config);
    let items = match client.lookup(&query).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Lookup failed: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        print_json(&items);
        return;
    }
    if items.is_empty() {
        eprintln!("No results for '{query}'");
        std::process::exit(1);
    }
    for item in &items {
        match item.display_author(config.show_author) {
            Some(author) => println!("{:<50} {}", item.title, author),
            None => println!("{}", item.title),
        }
    }
    eprintln!("\n{} results", items.len());
}

async fn cmd_type(cli: &Cli, config: WidgetConfig, keys: Keystrokes) {
    let client = Arc::new(build_client(&config));
    let page = match type_into_widget(config, client, TerminalPage::new(!cli.json), &keys).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Widget task failed: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        print_json(&page.to_json());
    } else {
        println!();
        print!("{}", page.render());
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typeahead=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match &cli.command {
        Commands::Lookup { query } => cmd_lookup(&cli, &config, query).await,
        Commands::Type { text, interval_ms, select, settle_ms } => {
            let keys = Keystrokes {
                text: text.clone(),
                interval: Duration::from_millis(*interval_ms),
                select: *select,
                settle: Duration::from_millis(*settle_ms),
            };
            cmd_type(&cli, config, keys).await
        }
    }
}
