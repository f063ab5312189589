use anyhow::{Context, Result};
use catalog::ToolCatalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{EngineConfig, RecommendationEngine, SuggestionOrder};
use sources::{Candidate, CandidateSource, RecommendationRequest};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// toolrec - Tool Recommendation Engine
#[derive(Parser)]
#[command(name = "toolrec")]
#[command(about = "Recommend tools for a free-text need", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get tool suggestions for a need
    Recommend {
        /// What the user is trying to do
        #[arg(long)]
        need: Option<String>,

        #[arg(long)]
        budget: Option<String>,

        #[arg(long)]
        audience: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        /// Maximum number of suggestions (1-6)
        #[arg(long, default_value = "6")]
        limit: usize,

        /// Order matches by catalog weight
        #[arg(long)]
        weighted: bool,

        /// Print the raw `{"suggestions": [...]}` JSON
        #[arg(long)]
        json: bool,

        /// Show why each tool was suggested
        #[arg(long)]
        explain: bool,
    },

    /// List catalog entries and the fallback list
    Catalog,

    /// Validate the catalog and report counts
    Check,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent tasks
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        ToolCatalog::load(cli.catalog.as_deref()).context("Failed to load tool catalog")?,
    );
    tracing::info!("Loaded catalog in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            need,
            budget,
            audience,
            priority,
            limit,
            weighted,
            json,
            explain,
        } => {
            let request = RecommendationRequest {
                need,
                budget,
                audience,
                priority,
            };
            let order = if weighted {
                SuggestionOrder::Weighted
            } else {
                SuggestionOrder::Catalog
            };
            handle_recommend(catalog, request, EngineConfig::new(limit, order), json, explain)?
        }
        Commands::Catalog => handle_catalog(&catalog),
        Commands::Check => handle_check(&catalog),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<ToolCatalog>,
    request: RecommendationRequest,
    config: EngineConfig,
    json: bool,
    explain: bool,
) -> Result<()> {
    let engine = RecommendationEngine::with_config(catalog.clone(), config);

    if json {
        let result = engine.recommend(&request);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let suggestions = engine.explain(&request);
    print_suggestions(&catalog, &suggestions, explain);
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &ToolCatalog) {
    println!("{}", format!("{} tools:", catalog.len()).bold().blue());
    for entry in catalog.entries() {
        println!(
            "{} {} [{}] weight {:.2}",
            "•".green(),
            entry.id.bold(),
            entry.category.as_deref().unwrap_or("-"),
            entry.weight
        );
        println!("    keywords: {}", entry.keywords.join(", "));
    }
    println!(
        "{} {}",
        "Fallback:".bold().blue(),
        catalog.fallback().join(", ")
    );
}

/// Handle the 'check' command
fn handle_check(catalog: &ToolCatalog) {
    let keyword_count: usize = catalog.entries().iter().map(|e| e.keywords.len()).sum();
    println!("{} Catalog is valid", "✓".green());
    println!("{}Tools: {}", "• ".cyan(), catalog.len());
    println!("{}Keywords: {}", "• ".cyan(), keyword_count);
    println!("{}Categories: {}", "• ".cyan(), catalog.categories().join(", "));
    println!("{}Fallback: {}", "• ".cyan(), catalog.fallback().join(", "));
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<ToolCatalog>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        println!("Nothing to benchmark");
        return Ok(());
    }
    let engine = RecommendationEngine::new(catalog.clone());

    // Random needs built from two catalog keywords
    let keywords: Vec<String> = catalog
        .entries()
        .iter()
        .flat_map(|e| e.keywords.iter().cloned())
        .collect();
    let needs: Vec<String> = (0..requests)
        .map(|_| {
            let first = &keywords[rand::random::<u32>() as usize % keywords.len()];
            let second = &keywords[rand::random::<u32>() as usize % keywords.len()];
            format!("I need help with {} and {}", first, second)
        })
        .collect();

    let workers = concurrent.clamp(1, requests);
    let chunk_size = requests.div_ceil(workers);

    // Use tokio::spawn to run the chunks concurrently
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for chunk in needs.chunks(chunk_size) {
        let engine = engine.clone();
        let chunk = chunk.to_vec();
        handles.push(tokio::spawn(async move {
            chunk
                .iter()
                .map(|need| {
                    let start = Instant::now();
                    engine.recommend(&RecommendationRequest::with_need(need.as_str()));
                    start.elapsed()
                })
                .collect::<Vec<Duration>>()
        }));
    }

    let mut timings = vec![];
    for handle in handles {
        timings.extend(handle.await?);
    }
    let wall_time = wall_clock.elapsed();

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg_latency = total / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p) as usize];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} across {} tasks", requests, workers);
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print suggestions
fn print_suggestions(catalog: &ToolCatalog, suggestions: &[Candidate], explain: bool) {
    let fallback = suggestions
        .first()
        .is_some_and(|c| c.source == CandidateSource::Fallback);
    let header = if fallback {
        "No direct match, popular tools:"
    } else {
        "Suggested tools:"
    };
    println!("{}", header.bold().blue());

    for (rank, candidate) in suggestions.iter().enumerate() {
        let name = catalog
            .get(&candidate.tool_id)
            .and_then(|e| e.name.as_deref())
            .unwrap_or(candidate.tool_id.as_str());
        println!(
            "{}. {} ({})",
            (rank + 1).to_string().green(),
            name,
            candidate.tool_id
        );
        if explain {
            match &candidate.matched_keyword {
                Some(keyword) => println!("   matched keyword {:?}", keyword),
                None => println!("   from the fallback list"),
            }
        }
    }
}
