//! gemini-proxy: HTTP proxy for the Google Gemini generateContent API
//!
//! Forwards prompts from a small JSON API to Gemini, attaching the
//! server-held API key, and serves the static frontend alongside it.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use gemini_proxy::{config::AppConfig, run_server, GeminiClient};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
#[command(name = "gemini-proxy")]
#[command(version = "0.1.0")]
#[command(about = "HTTP proxy for the Google Gemini generateContent API")]
#[command(long_about = "
gemini-proxy relays prompts to the Google Gemini API:
  - POST /api/generate forwards a prompt and returns the generated text
  - GET /api/health is a liveness probe
  - Other paths serve the static frontend

The Gemini API key is read from the GEMINI_API_KEY environment variable
(or upstream.api_key in the config file) and the process refuses to start
without it.

Example usage:
  gemini-proxy run
  gemini-proxy run --port 8080
  gemini-proxy test-upstream
")]
struct Cli {
    /// Path to config file (config.yaml is used if present; all fields have defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the proxy server
    Run {
        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override upstream API URL (e.g., "https://generativelanguage.googleapis.com")
        #[arg(long)]
        upstream_url: Option<String>,
    },

    /// Validate configuration and credential
    CheckConfig,

    /// Test connectivity and credential against the Gemini API
    TestUpstream,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .init();

    match cli.command {
        Commands::Run { port, upstream_url } => {
            run_proxy(cli.config.as_deref(), port, upstream_url).await?;
        }
        Commands::CheckConfig => {
            check_config(cli.config.as_deref());
        }
        Commands::TestUpstream => {
            test_upstream(cli.config.as_deref()).await;
        }
    }

    Ok(())
}

/// Run the proxy server
async fn run_proxy(
    config_path: Option<&Path>,
    port_override: Option<u16>,
    upstream_url_override: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_or_exit(config_path);

    // Apply CLI overrides
    if let Some(port) = port_override {
        config.server.port = port;
    }
    if let Some(url) = upstream_url_override {
        config.upstream.url = url;
    }

    let api_key = resolve_api_key_or_exit(&config);
    tracing::info!("Gemini API key loaded");

    let client = GeminiClient::new(&config.upstream, api_key)?;

    run_server(config, client).await
}

/// Validate configuration file and credential
fn check_config(config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);

    println!("✓ Configuration is valid\n");
    println!("Server:");
    println!("  Listen: {}:{}", config.server.host, config.server.port);
    println!("  Static dir: {}", config.server.static_dir);
    println!("\nUpstream:");
    println!("  URL: {}", config.upstream.base_url());
    println!("  Model: {}", config.upstream.model);
    println!("  Timeout: {}s", config.upstream.timeout_seconds);

    match config.resolve_api_key() {
        Ok(_) => println!("\n✓ API key is configured"),
        Err(e) => {
            eprintln!("\n✗ {}", e);
            std::process::exit(1);
        }
    }
}

/// Test connectivity and credential against the Gemini API
async fn test_upstream(config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);
    let api_key = resolve_api_key_or_exit(&config);

    let client = match GeminiClient::new(&config.upstream, api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ Failed to build client: {}", e);
            std::process::exit(1);
        }
    };

    println!("Testing connection to {}", config.upstream.base_url());

    match client.list_models().await {
        Ok(models) => {
            println!("✓ Gemini API is reachable");
            println!("  Available models: {}", models.len());
            for model in models.iter().take(5) {
                println!("    - {}", model.name);
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to reach Gemini API: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load configuration or exit with error
fn load_config_or_exit(config_path: Option<&Path>) -> AppConfig {
    match AppConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve the API key or exit before binding anything
fn resolve_api_key_or_exit(config: &AppConfig) -> String {
    match config.resolve_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("✗ {}", e);
            eprintln!("Set the GEMINI_API_KEY environment variable or upstream.api_key in config.yaml.");
            std::process::exit(1);
        }
    }
}
