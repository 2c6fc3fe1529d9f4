use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{InteractionIndex, InteractionLog, ItemId, LearnerId};
use pipeline::InteractionQuery;
use service::{InteractionService, ItemSummary, LearnerSummary};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// learnlog - browse learner interaction logs
#[derive(Parser)]
#[command(name = "learnlog")]
#[command(about = "Query learner interactions and the item catalog", long_about = None)]
struct Cli {
    /// Directory holding items.dat and interactions.dat
    #[arg(short, long, default_value = "data/sample")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List interactions, optionally narrowed down
    Interactions {
        /// Only interactions on this item
        #[arg(long, allow_negative_numbers = true)]
        item_id: Option<ItemId>,

        /// Only interactions by this learner
        #[arg(long, allow_negative_numbers = true)]
        learner_id: Option<LearnerId>,

        /// Only interactions of this kind (e.g. "attempt")
        #[arg(long)]
        kind: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the item catalog with interaction statistics
    Items {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show what a learner has done
    Learner {
        #[arg(long, allow_negative_numbers = true)]
        learner_id: LearnerId,
    },

    /// Run random item queries to measure listing latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = Arc::new(
        InteractionIndex::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load interaction data from {}", cli.data_dir.display()))?,
    );
    info!("Loaded {} in {:?}", cli.data_dir.display(), start.elapsed());

    let service = InteractionService::new(index);

    match cli.command {
        Commands::Interactions {
            item_id,
            learner_id,
            kind,
            json,
        } => {
            let query = InteractionQuery::new()
                .with_item(item_id)
                .with_learner(learner_id)
                .with_kind(kind);
            handle_interactions(&service, &query, json)?
        }
        Commands::Items { json } => handle_items(&service, json)?,
        Commands::Learner { learner_id } => handle_learner(&service, learner_id)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'interactions' command
fn handle_interactions(service: &InteractionService, query: &InteractionQuery, json: bool) -> Result<()> {
    let logs = service.list_interactions(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&logs)?);
    } else {
        print_interactions(&logs);
    }
    Ok(())
}

/// Handle the 'items' command
fn handle_items(service: &InteractionService, json: bool) -> Result<()> {
    let items = service.list_items();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_items(&items);
    }
    Ok(())
}

/// Handle the 'learner' command
fn handle_learner(service: &InteractionService, learner_id: LearnerId) -> Result<()> {
    let summary = service.learner_summary(learner_id)?;
    print_learner(service, &summary);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(service: InteractionService, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let concurrent = concurrent.max(1);

    let item_ids = service.index().interacted_item_ids();
    if item_ids.is_empty() {
        bail!("No interactions loaded, nothing to benchmark");
    }

    let queries: Vec<InteractionQuery> = (0..requests)
        .map(|_| InteractionQuery::for_item(item_ids[rand::random_range(0..item_ids.len())]))
        .collect();

    let wall_start = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for chunk in queries.chunks(concurrent) {
        let handles: Vec<_> = chunk
            .iter()
            .cloned()
            .map(|query| {
                let service = service.clone();
                tokio::task::spawn_blocking(move || {
                    let start = Instant::now();
                    service.list_interactions(&query)?;
                    Ok::<_, anyhow::Error>(start.elapsed())
                })
            })
            .collect();

        for handle in handles {
            timings.push(handle.await??);
        }
    }
    let wall_time = wall_start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_interactions(logs: &[InteractionLog]) {
    println!("{}", format!("{} interactions", logs.len()).bold().blue());
    println!("{:>8} {:>8} {:>8}  {}", "ID", "LEARNER", "ITEM", "KIND");
    for log in logs {
        println!(
            "{:>8} {:>8} {:>8}  {}",
            log.id.to_string().green(),
            log.learner_id,
            log.item_id,
            log.kind
        );
    }
}

fn print_items(items: &[ItemSummary]) {
    println!("{}", "Items:".bold().blue());
    for summary in items {
        println!(
            "{}. {} [{}] created {} - {} interactions by {} learners",
            summary.item.id.to_string().green(),
            summary.item.title,
            summary.item.item_type,
            summary.item.created_at,
            summary.stats.interaction_count,
            summary.stats.learner_count
        );
    }
}

fn print_learner(service: &InteractionService, summary: &LearnerSummary) {
    println!("{}", format!("Learner ID: {}", summary.learner_id).bold().blue());
    println!("{}Interactions: {}", "• ".green(), summary.interaction_count);
    for (kind, count) in &summary.kinds {
        println!("{}{}: {}", "• ".cyan(), kind, count);
    }
    println!("Items:");
    for item_id in &summary.item_ids {
        match service.index().get_item(*item_id) {
            Some(item) => println!("  - {} ({})", item.title, item.id),
            None => println!("  - item {}", item_id),
        }
    }
}
