//! Standalone generation endpoint server.
//!
//! Hosts `POST /api/generate` over the OpenAI-backed generation backend.
//! The upstream key comes from `OPENAI_API_KEY`; logs go to stderr and are
//! filtered with `RUST_LOG` (info by default).

use anyhow::Context as _;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use revise_term::api::{self, ApiState, OpenAiBackend};

#[derive(Debug, Parser)]
#[command(name = "revise-api", about = "Generation endpoint for RéviseTerm")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3900)]
    port: u16,

    /// Upstream model name
    #[arg(short, long, default_value = "gpt-4.1-mini")]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY is not set; the endpoint cannot reach the generation service")?;

    let state = ApiState::new(OpenAiBackend::new(api_key, args.model));
    let addr = format!("{}:{}", args.host, args.port);
    info!("Starting revise-api on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, api::router(state))
        .await
        .context("Server error")?;
    Ok(())
}
