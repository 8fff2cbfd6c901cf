use anyhow::Context;
use clap::Parser;
use passforge::cli::Args;
use passforge::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    init_logging();
    tracing::info!(
        length = config.defaults.length,
        numbers = config.defaults.numbers,
        symbols = config.defaults.symbols,
        widgets = config.defaults.widgets,
        "starting"
    );

    passforge::ui::runtime::run(&config)?;
    Ok(())
}

/// Best-effort file logging: the TUI owns the terminal, so diagnostics go
/// to a log file under the config directory. Init failure is not fatal.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let path = Config::log_path();
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}
