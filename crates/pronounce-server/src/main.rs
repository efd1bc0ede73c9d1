use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use pronounce_server::{create_router, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "pronounce")]
#[command(about = "Speak words and phrases using dictionary pronunciation recordings")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    #[command(flatten)]
    server: ServerConfig,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive; the HTML parser crates are very chatty below info.
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
            LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
        }
    }
}

fn init_tracing(level: &LogLevel, utc: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.directive()));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if utc {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .init();
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.utc);

    let config = cli.server;
    let state = AppState::from_config(&config).context("Failed to build HTTP client")?;
    let router = create_router(state, &config.public_dir);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        public_dir = %config.public_dir.display(),
        ffmpeg = %config.ffmpeg.display(),
        "Server running"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
