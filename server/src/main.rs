use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use summary_core::limits::{MAX_INPUT_BYTES, MAX_SENTENCES};
use summary_core::Limits;
use summary_server::{body_limit, build_app};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

/// HTTP front end for extractive summaries
#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Bytes of request text considered; the rest is ignored
    #[arg(long, default_value_t = MAX_INPUT_BYTES)]
    max_input_bytes: usize,
    /// Sentences kept per request before selection
    #[arg(long, default_value_t = MAX_SENTENCES)]
    max_sentences: usize,
}

impl Args {
    fn limits(&self) -> Limits {
        Limits { max_input_bytes: self.max_input_bytes, max_sentences: self.max_sentences, ..Limits::default() }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let limits = args.limits();
    let app = build_app(limits)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        max_input_bytes = limits.max_input_bytes,
        max_sentences = limits.max_sentences,
        max_body_bytes = body_limit(&limits),
        "summary server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
