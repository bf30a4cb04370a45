use anyhow::Result;
use ollama_nodes::image::ImageTensor;
use ollama_nodes::nodes::{GenerateNode, VisionNode};
use ollama_nodes::ollama::OllamaClient;
use ollama_nodes::{config, models};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn usage() -> ! {
    eprintln!("Usage: ollama-nodes <models | generate <prompt> | vision <png-path> [query]>");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Initialize tracing with the determined log level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or_else(|| usage());

    match command {
        "models" => {
            for model in models::list_installed_models().await? {
                println!("{}", model);
            }
        }
        "generate" => {
            let prompt = args.get(1).cloned().unwrap_or_else(|| usage());
            let model = require_model(&config)?;
            let client = OllamaClient::new(config.ollama.clone())?;

            info!(model = %model, "Running generate node");
            let node = GenerateNode::new(model).with_prompt(prompt);
            println!("{}", node.run(&client).await?);
        }
        "vision" => {
            let path = args.get(1).cloned().unwrap_or_else(|| usage());
            let model = require_model(&config)?;
            let client = OllamaClient::new(config.ollama.clone())?;

            let png_bytes = tokio::fs::read(&path).await?;
            let tensor = ImageTensor::from_png_bytes(&png_bytes)?;

            info!(model = %model, path = %path, "Running vision node");
            let mut node = VisionNode::new(model, vec![tensor]);
            if let Some(query) = args.get(2) {
                node = node.with_query(query);
            }
            println!("{}", node.run(&client).await?);
        }
        _ => usage(),
    }

    Ok(())
}

fn require_model(config: &config::Config) -> Result<String> {
    config
        .ollama
        .model
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No model configured: set ollama.model in config.yaml"))
}
