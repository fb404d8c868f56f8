use std::path::PathBuf;
use std::sync::Arc;

use bucket_dl::fetcher::{FetcherBuilder, DEFAULT_CONCURRENCY};
use bucket_dl::lister::list_all;
use bucket_dl::store::config::{DEFAULT_ENDPOINT, DEFAULT_REGION};
use bucket_dl::{S3Config, S3Store, Status};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use color_eyre::eyre::{eyre, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Download every object of a bucket into a local folder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Access key of the storage account
    #[arg(long = "accessKey", value_name = "KEY")]
    access_key: Option<String>,

    /// Secret key of the storage account
    #[arg(long = "secretKey", value_name = "KEY")]
    secret_key: Option<String>,

    /// Output folder
    #[arg(short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Skip objects whose file already exists in the output folder
    #[arg(long = "skipExisting")]
    skip_existing: bool,

    /// Bucket to download
    #[arg(long, default_value = "evanmmo-vods")]
    bucket: String,

    /// S3 endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Signing region
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Number of concurrent downloads
    #[arg(
        long,
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    concurrency: usize,

    /// Hide progress bars
    #[arg(long)]
    no_progress: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("bucket_dl={}", level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = S3Config::new(
        args.access_key.unwrap_or_default(),
        args.secret_key.unwrap_or_default(),
    )
    .with_endpoint(args.endpoint)
    .with_region(args.region);
    let store = Arc::new(S3Store::new(config).await?);

    let objects = list_all(store.as_ref(), &args.bucket).await?;

    let mut builder = if args.no_progress {
        FetcherBuilder::hidden()
    } else {
        FetcherBuilder::new()
    };
    if let Some(output) = args.output {
        builder = builder.directory(output);
    }
    let fetcher = builder
        .concurrency(args.concurrency)
        .skip_existing(args.skip_existing)
        .build();

    let summaries = fetcher.fetch_all(store, &args.bucket, &objects).await?;

    let downloaded = summaries.iter().filter(|s| s.is_success()).count();
    let skipped = summaries
        .iter()
        .filter(|s| matches!(s.status(), Status::Skipped(_)))
        .count();
    info!(downloaded, skipped, "Fetch complete");
    println!("Done! {} downloaded, {} skipped", downloaded, skipped);

    Ok(())
}
