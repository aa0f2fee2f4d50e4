use clap::Parser;
use pulsenode::config::Config;
use pulsenode::term::session::run_session;
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Debug, Parser)]
#[command(name = "pulsenode", version, about = "PulseNode game hosting console")]
struct Args {
    /// TOML config file (if omitted, use env/.env)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between boot lines in milliseconds
    #[arg(long)]
    boot_interval_ms: Option<u64>,

    /// Delay between hero word changes in milliseconds
    #[arg(long)]
    word_interval_ms: Option<u64>,

    /// Skip the boot sequence
    #[arg(long)]
    no_boot: bool,

    /// Plain output without ANSI escapes
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    tracing::debug!(?cfg, "configuration loaded");

    let stdin = BufReader::new(tokio::io::stdin());
    run_session(stdin, tokio::io::stdout(), &cfg).await?;

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    // allow overriding from the CLI
    if let Some(ms) = args.boot_interval_ms {
        cfg.boot_interval_ms = ms;
    }
    if let Some(ms) = args.word_interval_ms {
        cfg.word_interval_ms = ms;
    }
    if args.no_boot {
        cfg.boot = false;
    }
    if args.no_color || !std::io::stdout().is_terminal() {
        cfg.color = false;
    }

    Ok(cfg)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let _ = color_eyre::install();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
