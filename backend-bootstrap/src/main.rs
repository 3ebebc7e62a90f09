use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use backend_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "riftwalk-backend")]
#[command(about = "Riftwalk progression backend", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory for daily-rotated log files, in addition to stdout
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = &args.config {
        std::env::set_var("RIFTWALK_CONFIG", config);
    }

    let config = AppConfig::load().await?;
    let log_dir = args.log_dir.or_else(|| config.log_dir.clone());
    let _guard = init_tracing(log_dir.as_deref());

    backend_bootstrap::run_standalone(config).await
}

fn init_tracing(log_dir: Option<&str>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer();

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "riftwalk-backend.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .init();
            None
        }
    }
}
