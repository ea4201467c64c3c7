// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Load the seed list (built-in, or from --seeds-file)
// 3. Harvest every seed with a bounded pool of workers
// 4. Write the sorted CSV and print the final tally
// 5. Exit with 0 on success, 1 if anything fatal happened
//
// Failed seeds are not fatal: they show up in the progress output and in
// the summary, and the run carries on without them.
// =============================================================================

mod cli;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use uk_link_harvester::harvest::{default_seeds, load_seeds_file, Harvester, SeedReport};
use uk_link_harvester::{write_results, DirectoryFetcher, DomainFilter, HarvestSummary};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config();
    config.validate()?;

    let seeds = match &config.seeds_file {
        Some(path) => load_seeds_file(path)?,
        None => default_seeds(),
    };

    let filter = DomainFilter::new(&config.suffix);
    println!(
        "🚀 Collecting .{} URLs (target: {})",
        filter.suffix(),
        config.target
    );
    println!(
        "\n📍 Scraping {} director{} with {} worker(s)",
        seeds.len(),
        if seeds.len() == 1 { "y" } else { "ies" },
        config.concurrency
    );

    let failed_seeds = Arc::new(Mutex::new(Vec::new()));
    let failed_sink = failed_seeds.clone();

    let harvester = Harvester::new(
        DirectoryFetcher::new(config.timeout),
        filter,
        config.concurrency,
    )
    .with_progress_callback(Arc::new(move |report: &SeedReport| {
        print_progress(report);
        if report.failed {
            if let Ok(mut failed) = failed_sink.lock() {
                failed.push(report.seed.clone());
            }
        }
    }));

    let seed_count = seeds.len();
    let urls = harvester.harvest(seeds).await;

    println!("\n🏁 Harvest finished: {} URLs", urls.len());

    write_results(&urls, &config.output)?;

    let failed_seeds = failed_seeds
        .lock()
        .map(|failed| failed.clone())
        .unwrap_or_default();

    let summary = HarvestSummary {
        seeds: seed_count,
        failed_seeds,
        urls: urls.len(),
        target: config.target,
        output: config.output.display().to_string(),
    };

    print_summary(&summary, config.json)?;
    Ok(())
}

// RUST_LOG wins when set; otherwise warnings only, or debug with -v.
// Logs go to stderr so stdout stays clean for --json.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_progress(report: &SeedReport) {
    if report.failed {
        println!("   ❌ {} failed | Total: {}", report.seed, report.total);
    } else {
        println!(
            "   → {} URLs ({} new) from {} | Total: {}",
            report.found, report.added, report.seed, report.total
        );
    }
}

fn print_summary(summary: &HarvestSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("✅ {} URLs saved to {}", summary.urls, summary.output);
    println!();
    println!("📊 Summary:");
    println!("   📂 Seeds: {}", summary.seeds);
    println!("   ❌ Failed: {}", summary.failed_seeds.len());
    println!("   🔗 URLs: {}", summary.urls);

    if summary.target_reached() {
        println!("   🎯 Target of {} reached", summary.target);
    } else {
        println!(
            "   🎯 Target of {} not reached ({} short)",
            summary.target,
            summary.target - summary.urls
        );
    }

    Ok(())
}
