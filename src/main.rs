use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Deserialize;
use tracing::info;

use job_match::config::EngineConfig;
use job_match::matching::{
    ApplicationRequest, InMemoryPostingStore, JobPosting, MatchDispatcher,
};
use job_match::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "job-match",
    about = "Screen a batch of job applications against posting criteria",
    version
)]
struct Cli {
    /// JSON batch file holding `{ "postings": [...], "applications": [...] }`
    batch: PathBuf,
    /// Print every application with its disposition instead of only the
    /// accepted ones
    #[arg(long)]
    detailed: bool,
}

#[derive(Debug, Deserialize)]
struct BatchFile {
    postings: Vec<JobPosting>,
    applications: Vec<ApplicationRequest>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = EngineConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let raw = std::fs::read_to_string(&cli.batch)?;
    let batch: BatchFile = serde_json::from_str(&raw)?;
    info!(
        postings = batch.postings.len(),
        applications = batch.applications.len(),
        "screening batch"
    );

    let store = Arc::new(InMemoryPostingStore::with_postings(batch.postings));
    let dispatcher = MatchDispatcher::with_config(store, config.dispatcher());

    if cli.detailed {
        let outcomes = dispatcher.screen_batch(batch.applications).await?;
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        let accepted = dispatcher.process_batch(batch.applications).await?;
        info!(accepted = accepted.len(), "batch screened");
        println!("{}", serde_json::to_string_pretty(&accepted)?);
    }

    Ok(())
}
