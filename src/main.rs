// src/main.rs
// papi - item catalog service

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use papi::api::http::{API_PREFIX, create_router};
use papi::calc::{calculate_complex_expression, process_data};
use papi::config::PapiConfig;
use papi::llm::{OpenAIClient, llm_call};
use papi::state::AppState;

#[derive(Parser)]
#[command(name = "papi")]
#[command(about = "Item catalog HTTP service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run; `serve` when none is given
    fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve { port: None })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Port to listen on (overrides PAPI_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send one prompt to the chat completions API and print the reply
    Ask {
        prompt: String,

        /// Model name (overrides PAPI_LLM_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Run the expression evaluator and list filter on the demo inputs
    Calc,
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

async fn run_server(config: PapiConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    info!(
        "Starting {} v{} ({} seeded items)",
        state.info.title,
        state.info.version,
        state.store.len().await
    );

    let app = create_router(state, &config.cors_origin);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}{}", bind_address, API_PREFIX);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn run_ask(config: PapiConfig, prompt: &str, model: Option<&str>) -> Result<()> {
    let client = OpenAIClient::new(config.llm_client_config())?;
    let answer = llm_call(&client, prompt, model).await?;
    println!("{}", answer);
    Ok(())
}

/// Output of the `calc` subcommand on the demo inputs
fn calc_report() -> String {
    let (x, y) = (5.0, 2.5);
    let result = calculate_complex_expression(x, y);

    let numbers: [i64; 6] = [1, 2, 3, 4, 5, 6];
    let filtered = process_data(&numbers);

    format!(
        "calculate_complex_expression({}, {}) = {}\nprocess_data({:?}) = {:?}",
        x, y, result, numbers, filtered
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = PapiConfig::from_env();

    // RUST_LOG wins over PAPI_LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            run_server(config).await
        }
        Commands::Ask { prompt, model } => run_ask(config, &prompt, model.as_deref()).await,
        Commands::Calc => {
            println!("{}", calc_report());
            Ok(())
        }
    }
}
