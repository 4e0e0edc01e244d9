//! Focus Search CLI - mock platform search from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use focus_search::{
    catalog, JsonHistoryStore, Platform, SearchService, SearchSuggestion, SuggestionType,
};

/// Focus Search - platform search demo CLI
#[derive(Parser)]
#[command(name = "focus-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a platform and record the query
    Search(SearchArgs),

    /// Show suggestions for a partial query
    Suggest(SuggestArgs),

    /// List supported platforms
    Platforms,

    /// Show or clear the recent-search history
    History(HistoryArgs),

    /// Print the hand-off URLs (native app scheme and web fallback) for a query
    Open(OpenArgs),
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Platform to search (youtube, reddit, instagram, facebook, twitter, google, bing)
    #[arg(short, long, default_value = "google")]
    platform: Platform,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser)]
struct SuggestArgs {
    /// Partial query
    query: String,

    /// Platform context for suggestions
    #[arg(short, long, default_value = "google")]
    platform: Platform,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser)]
struct HistoryArgs {
    /// Clear the history instead of showing it
    #[arg(long)]
    clear: bool,
}

#[derive(Parser)]
struct OpenArgs {
    /// Search query to hand off
    query: String,

    /// Target platform
    #[arg(short, long, default_value = "google")]
    platform: Platform,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let mut service = SearchService::new(Box::new(JsonHistoryStore::new()?));

    match cli.command {
        Commands::Search(args) => run_search(&mut service, args),
        Commands::Suggest(args) => run_suggest(&service, args),
        Commands::Platforms => list_platforms(),
        Commands::History(args) => run_history(&mut service, args),
        Commands::Open(args) => run_open(args),
    }
}

fn run_search(service: &mut SearchService, args: SearchArgs) -> Result<()> {
    let results = service.search(&args.query, args.platform)?;
    service.record_query(&args.query)?;

    match args.format {
        OutputFormat::Text => {
            println!(
                "\nSearch results for \"{}\" on {} ({} results):\n",
                args.query,
                args.platform,
                results.len()
            );
            for (i, result) in results.iter().take(args.limit).enumerate() {
                println!("{}. {}", i + 1, result.title);
                println!("   URL: {}", result.url);
                if !result.description.is_empty() {
                    let description = if result.description.len() > 150 {
                        format!("{}...", &result.description[..150])
                    } else {
                        result.description.clone()
                    };
                    println!("   {}", description);
                }
                if !result.metadata.is_empty() {
                    let meta: Vec<String> = result
                        .metadata
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect();
                    println!("   {}", meta.join(" | "));
                }
                println!();
            }
            println!("Tip: {}", catalog::search_tip(args.platform));
        }
        OutputFormat::Json => {
            let output: Vec<_> = results.iter().take(args.limit).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Compact => {
            for result in results.iter().take(args.limit) {
                println!("{}\t{}", result.title, result.url);
            }
        }
    }

    Ok(())
}

fn run_suggest(service: &SearchService, args: SuggestArgs) -> Result<()> {
    let suggestions = service.suggestions(&args.query, args.platform);

    match args.format {
        OutputFormat::Text => {
            if suggestions.is_empty() {
                println!("No suggestions for \"{}\"", args.query);
                return Ok(());
            }
            println!("Suggestions for \"{}\" on {}:\n", args.query, args.platform);
            for suggestion in &suggestions {
                println!("  [{}] {}", kind_label(suggestion), suggestion.text);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        OutputFormat::Compact => {
            for suggestion in &suggestions {
                println!("{}", suggestion.text);
            }
        }
    }

    Ok(())
}

fn kind_label(suggestion: &SearchSuggestion) -> &'static str {
    match suggestion.kind {
        SuggestionType::Recent => "recent",
        SuggestionType::Popular => "popular",
        SuggestionType::Trending => "trending",
        SuggestionType::Related => "related",
    }
}

fn list_platforms() -> Result<()> {
    println!("Supported platforms:\n");
    for platform in Platform::all() {
        let meta = platform.metadata();
        println!(
            "  {:<10} {:<10} app scheme: {}",
            platform.id(),
            meta.display_name,
            meta.app_scheme.unwrap_or("-")
        );
    }
    println!("\nUsage: focus-search search \"query\" -p youtube");
    Ok(())
}

fn run_history(service: &mut SearchService, args: HistoryArgs) -> Result<()> {
    if args.clear {
        service.clear_history()?;
        println!("History cleared.");
        return Ok(());
    }

    if service.recent_searches().is_empty() {
        println!("No recent searches.");
    } else {
        println!("Recent searches:\n");
        for (i, query) in service.recent_searches().iter().enumerate() {
            println!("  {}. {}", i + 1, query);
        }
    }

    println!("\nPopular searches:\n");
    for query in service.popular_searches() {
        println!("  * {}", query);
    }
    Ok(())
}

fn run_open(args: OpenArgs) -> Result<()> {
    // Whether a native handler exists is up to the OS; print both targets
    // and let the caller pick.
    match args.platform.app_search_url(&args.query) {
        Some(app_url) => {
            println!("App:     {}", app_url);
            println!("Browser: {}", args.platform.web_search_url(&args.query));
        }
        None => {
            println!("Browser: {}", args.platform.web_search_url(&args.query));
        }
    }
    Ok(())
}
