use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vjdir_core::{config::Config, facets::distinct_features, seed, CatalogStore, SearchEngine, SearchRequest};
use vjdir_server::AppState;

#[derive(Parser)]
#[command(name = "vjdir", about = "vjdir — searchable directory of VJ software")]
struct Cli {
    /// Write debug logs to /tmp/vjdir-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// JSON seed file to load instead of the configured one.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Search the catalog once and print the matches.
    Search(SearchArgs),
    /// List every feature present in the catalog.
    Features,
}

#[derive(Args)]
struct SearchArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    query: Option<String>,
    /// Supported OS (Windows, macOS, Linux). Repeat for any-of.
    #[arg(long = "os")]
    os: Vec<String>,
    /// Pricing model (Free, Paid, Subscription, Freemium). Repeat for any-of.
    #[arg(long)]
    pricing: Vec<String>,
    /// Key feature, exact match. Repeat for any-of.
    #[arg(long)]
    feature: Vec<String>,
    /// Result order: name, newest, catalog.
    #[arg(long)]
    sort: Option<String>,
    /// Print full records as JSON instead of one name per line.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn into_request(self, default_sort: &str) -> SearchRequest {
        SearchRequest {
            query: self.query,
            supported_os: Some(self.os),
            pricing_model: Some(self.pricing),
            features: Some(self.feature),
            sort: Some(self.sort.unwrap_or_else(|| default_sort.to_string())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed; using defaults");
        Config::defaults()
    });
    let seed_path = cli.seed.or_else(|| config.catalog.seed_file.clone());
    let store = seed::open_store(seed_path.as_deref())?;

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let state = AppState::new(Arc::new(store), config.search.default_sort);
            tokio::runtime::Runtime::new()?.block_on(vjdir_server::serve(&server, state))
        }
        Command::Search(args) => {
            let json = args.json;
            let request = args.into_request(config.search.default_sort.as_str());
            let results = SearchEngine::new(store).search(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for software in &results {
                    println!("{}", software.name);
                }
            }
            Ok(())
        }
        Command::Features => {
            for feature in distinct_features(&store.all()) {
                println!("{feature}");
            }
            Ok(())
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `info`). With
/// `--debug` they go to a file at debug level instead.
fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/vjdir-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("vjdir debug log started — tail -f /tmp/vjdir-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("info"))
            .init();
    }
    Ok(())
}
