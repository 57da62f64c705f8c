use clap::{Parser, Subcommand};
use detector::{
    DetectorError, EmotionSource, EndpointClient, EndpointConfig, LexiconDetector,
    INVALID_TEXT_MESSAGE,
};
use probe::report::RunSummary;
use probe::suite::ProbeSuite;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Black-box probe suite for a local emotion detection service")]
struct Cli {
    /// Base URL of the emotion detection service
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    base_url: String,

    /// Timeout for classification probes, in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    /// Timeout for the liveness check, in seconds
    #[arg(long, default_value = "5", global = true)]
    health_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// Run the full probe suite
    Run {
        /// Print the summary as JSON instead of per-case lines
        #[arg(long)]
        json: bool,
    },
    /// Classify a piece of text directly
    Detect {
        /// The text to classify
        #[arg(short, long)]
        text: String,
        /// Use the remote endpoint instead of the local lexicon
        #[arg(long)]
        remote: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = EndpointConfig::default()
        .with_base_url(&cli.base_url)
        .with_probe_timeout(Duration::from_secs(cli.timeout_secs))
        .with_health_timeout(Duration::from_secs(cli.health_timeout_secs));
    let client = EndpointClient::new(config)?;

    match cli.command {
        Commands::Health => {
            if !health(&client).await {
                std::process::exit(1);
            }
        }
        Commands::Run { json } => {
            let summary = run_suite(&client, json).await;
            if !summary.all_passed() {
                std::process::exit(1);
            }
        }
        Commands::Detect { text, remote } => {
            if !detect(&client, &text, remote).await {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn health(client: &EndpointClient) -> bool {
    println!("Checking {} ...", client.base_url());

    match client.health_check().await {
        Ok(()) => {
            println!("✅ Service is running and accessible.");
            true
        }
        Err(e) => {
            println!("❌ Service is not accessible: {}", e);
            false
        }
    }
}

async fn run_suite(client: &EndpointClient, json: bool) -> RunSummary {
    info!("Starting probe run against {}", client.base_url());

    let suite = ProbeSuite::new(client);
    let summary = suite.run().await;

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to serialize summary: {}", e),
        }
    } else {
        for case in &summary.cases {
            println!("{}: {}", case.name, case.outcome);
        }
        println!();
        if summary.endpoint_available {
            println!("Probe run completed: {}", summary);
        } else {
            println!("Service is not running; endpoint cases were skipped.");
            println!("Start it and re-run, or pass --base-url to point elsewhere.");
        }
    }

    summary
}

async fn detect(client: &EndpointClient, text: &str, remote: bool) -> bool {
    let result = if remote {
        info!("Classifying via remote endpoint");
        client.detect(text).await
    } else {
        info!("Classifying via local lexicon");
        LexiconDetector::new().detect(text).await
    };

    match result {
        Ok(reading) => {
            println!("{}", reading.render());
            true
        }
        Err(DetectorError::InvalidText) => {
            println!("{}", INVALID_TEXT_MESSAGE);
            false
        }
        Err(e) => {
            error!("Detection failed: {}", e);
            println!("❌ Detection failed: {}", e);
            false
        }
    }
}
