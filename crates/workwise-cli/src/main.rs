use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workwise_core::WorkwiseConfig;

fn init_tracing(config: &WorkwiseConfig, verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter))
    };
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = workwise_cli::command().get_matches();
    let config = workwise_cli::load_config(&matches)?;
    init_tracing(
        &config,
        matches.get_flag("verbose"),
        workwise_cli::json_logs(&matches),
    );

    tracing::debug!(version = workwise_core::VERSION, "workwise starting");
    let mut stdout = std::io::stdout().lock();
    workwise_cli::run(&matches, config, &mut stdout).await
}
